//! Structured representation of an FFmpeg filtergraph.
//!
//! A graph is a list of chains separated by `;`. Each chain reads from zero or
//! more labelled pads, applies comma-separated filters and optionally labels
//! its output:
//!
//! ```text
//! [in0][in1]filter=a:key=value,other[out];[out]...
//! ```
//!
//! See <https://ffmpeg.org/ffmpeg-filters.html#Filtergraph-syntax-1>.

use std::fmt;

/// One argument of a filter: either `value` or `key=value`.
#[derive(Debug, Clone, PartialEq)]
pub enum FilterArg {
    Positional(String),
    Named(String, String),
}

impl fmt::Display for FilterArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Positional(value) => f.write_str(value),
            Self::Named(key, value) => write!(f, "{}={}", key, value),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
enum FilterParams {
    None,
    List(Vec<FilterArg>),
    /// Pre-formatted parameter string, written after `=` even when empty
    Raw(String),
}

/// A single filter such as `format=rgba` or `overlay=format=rgb`.
#[derive(Debug, Clone, PartialEq)]
pub struct Filter {
    name: String,
    params: FilterParams,
}

impl Filter {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            params: FilterParams::None,
        }
    }

    /// Filter with a verbatim parameter string.
    pub fn raw(name: impl Into<String>, params: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            params: FilterParams::Raw(params.into()),
        }
    }

    pub fn positional(self, value: impl fmt::Display) -> Self {
        self.push(FilterArg::Positional(value.to_string()))
    }

    pub fn arg(self, key: impl Into<String>, value: impl fmt::Display) -> Self {
        self.push(FilterArg::Named(key.into(), value.to_string()))
    }

    fn push(mut self, arg: FilterArg) -> Self {
        match &mut self.params {
            FilterParams::List(args) => args.push(arg),
            FilterParams::Raw(raw) => {
                if !raw.is_empty() {
                    raw.push(':');
                }
                raw.push_str(&arg.to_string());
            }
            FilterParams::None => self.params = FilterParams::List(vec![arg]),
        }
        self
    }
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)?;
        match &self.params {
            FilterParams::None => Ok(()),
            FilterParams::Raw(raw) => write!(f, "={}", raw),
            FilterParams::List(args) => {
                for (i, arg) in args.iter().enumerate() {
                    f.write_str(if i == 0 { "=" } else { ":" })?;
                    write!(f, "{}", arg)?;
                }
                Ok(())
            }
        }
    }
}

/// A linear chain of filters between labelled pads.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterChain {
    inputs: Vec<String>,
    filters: Vec<Filter>,
    output: Option<String>,
}

impl FilterChain {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn input(mut self, label: impl Into<String>) -> Self {
        self.inputs.push(label.into());
        self
    }

    pub fn filter(mut self, filter: Filter) -> Self {
        self.filters.push(filter);
        self
    }

    pub fn output(mut self, label: impl Into<String>) -> Self {
        self.output = Some(label.into());
        self
    }

    pub fn inputs(&self) -> &[String] {
        &self.inputs
    }

    pub fn output_label(&self) -> Option<&str> {
        self.output.as_deref()
    }
}

impl fmt::Display for FilterChain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for label in &self.inputs {
            write!(f, "[{}]", label)?;
        }
        for (i, filter) in self.filters.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "{}", filter)?;
        }
        if let Some(label) = &self.output {
            write!(f, "[{}]", label)?;
        }
        Ok(())
    }
}

/// An ordered list of filter chains, passed to `-filter_complex`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterGraph {
    chains: Vec<FilterChain>,
}

impl FilterGraph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn chain(mut self, chain: FilterChain) -> Self {
        self.chains.push(chain);
        self
    }

    /// Labels that are read but never produced by an earlier chain.
    ///
    /// Numeric labels refer to FFmpeg inputs and are never dangling.
    pub fn dangling_labels(&self) -> Vec<&str> {
        let mut produced: Vec<&str> = Vec::new();
        let mut dangling = Vec::new();
        for chain in &self.chains {
            for label in chain.inputs() {
                let is_input = label.chars().all(|c| c.is_ascii_digit());
                if !is_input && !produced.contains(&label.as_str()) {
                    dangling.push(label.as_str());
                }
            }
            if let Some(label) = chain.output_label() {
                produced.push(label);
            }
        }
        dangling
    }
}

impl fmt::Display for FilterGraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, chain) in self.chains.iter().enumerate() {
            if i > 0 {
                f.write_str(";")?;
            }
            write!(f, "{}", chain)?;
        }
        Ok(())
    }
}
