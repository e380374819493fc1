/// Whitespace-style field access over one raw text line.
///
/// Splits the line on a delimiter character, skipping empty fields so runs
/// of delimiters collapse. [`LineFields::get`] is total over the index:
/// asking for a field past the end yields `""`. Parsers lean on that to
/// probe fixed positions without bounds checks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineFields<'a> {
    fields: Vec<&'a str>,
}

impl<'a> LineFields<'a> {
    /// Tokenize `line` on `delim`, dropping empty fields.
    pub fn new(line: &'a str, delim: char) -> Self {
        Self {
            fields: line
                .split(delim)
                .map(str::trim)
                .filter(|field| !field.is_empty())
                .collect(),
        }
    }

    /// Field at `index`, or `""` when the line has fewer fields.
    pub fn get(&self, index: usize) -> &'a str {
        self.fields.get(index).copied().unwrap_or("")
    }

    /// Number of fields on the line.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// True when the line held no fields at all.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}
