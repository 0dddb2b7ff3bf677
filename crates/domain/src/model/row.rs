use std::ops::Index;

/// One parsed input record: its fields in column order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Row(Vec<String>);

impl Row {
    pub fn new(fields: Vec<String>) -> Self {
        Self(fields)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Field at `index`, if the row is wide enough.
    #[inline]
    pub fn field(&self, index: usize) -> Option<&str> {
        self.0.get(index).map(String::as_str)
    }
}

impl Index<usize> for Row {
    type Output = str;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl From<Vec<String>> for Row {
    fn from(fields: Vec<String>) -> Self {
        Self::new(fields)
    }
}

impl<const N: usize> From<[&str; N]> for Row {
    fn from(fields: [&str; N]) -> Self {
        Self::new(fields.iter().map(|f| (*f).to_string()).collect())
    }
}

impl FromIterator<String> for Row {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
