use std::fmt;

/// コーデック固有のメタデータ値。
#[derive(Debug, Clone, PartialEq)]
pub enum MetadataValue {
    Int(i64),
    Pair(u32, u32),
    FloatPair(f64, f64),
    Text(String),
    Bytes(Vec<u8>),
}

/// キーと値の対応表。挿入順を保持し、同じキーは後から入れた値で上書きします。
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CodecInfo {
    entries: Vec<(String, MetadataValue)>,
}

impl CodecInfo {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, value: MetadataValue) {
        let key = key.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some((_, v)) => *v = value,
            None => self.entries.push((key, value)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&MetadataValue> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }
}

impl fmt::Display for MetadataValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MetadataValue::Int(v) => write!(f, "{}", v),
            MetadataValue::Pair(a, b) => write!(f, "({}, {})", a, b),
            MetadataValue::FloatPair(a, b) => write!(f, "({:.2}, {:.2})", a, b),
            MetadataValue::Text(s) => write!(f, "{:?}", s),
            // バイナリはそのまま出すと長すぎるので長さだけ表示する
            MetadataValue::Bytes(b) => write!(f, "<{} bytes>", b.len()),
        }
    }
}

impl fmt::Display for CodecInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, (key, value)) in self.entries.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{:?}: {}", key, value)?;
        }
        write!(f, "}}")
    }
}
