use std::borrow::Cow;
use std::error::Error as StdError;
use std::fmt;

/// One piece of a log message.
///
/// Plain fragments are any displayable text. Traced fragments come from error
/// values and keep a longer trace rendering next to their short description;
/// `Logger::error` prints the trace when trace rendering is enabled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Fragment {
    Text(String),
    Traced { description: String, trace: String },
}

impl Fragment {
    pub fn text(s: impl Into<String>) -> Self {
        Fragment::Text(s.into())
    }

    pub fn traced(description: impl Into<String>, trace: impl Into<String>) -> Self {
        Fragment::Traced {
            description: description.into(),
            trace: trace.into(),
        }
    }

    /// Capture a std error: the description is its `Display` form and the
    /// trace is the error followed by its `source()` chain.
    pub fn from_error(err: &(dyn StdError + 'static)) -> Self {
        let mut trace = format!("Error: {}", err);
        let mut source = err.source();
        while let Some(cause) = source {
            trace.push_str(&format!("\n    caused by: {}", cause));
            source = cause.source();
        }
        Fragment::traced(err.to_string(), trace)
    }

    pub fn trace(&self) -> Option<&str> {
        match self {
            Fragment::Text(_) => None,
            Fragment::Traced { trace, .. } => Some(trace),
        }
    }

    /// Text used in the joined message
    pub fn render(&self, use_trace: bool) -> Cow<'_, str> {
        match self {
            Fragment::Text(s) => Cow::Borrowed(s),
            Fragment::Traced { trace, .. } if use_trace => Cow::Borrowed(trace),
            Fragment::Traced { description, .. } => Cow::Borrowed(description),
        }
    }
}

impl fmt::Display for Fragment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(false))
    }
}

impl From<&str> for Fragment {
    fn from(s: &str) -> Self {
        Fragment::Text(s.to_string())
    }
}

impl From<String> for Fragment {
    fn from(s: String) -> Self {
        Fragment::Text(s)
    }
}

impl From<&String> for Fragment {
    fn from(s: &String) -> Self {
        Fragment::Text(s.clone())
    }
}

impl From<&Fragment> for Fragment {
    fn from(f: &Fragment) -> Self {
        f.clone()
    }
}

/// anyhow's debug form includes the cause chain and, when captured,
/// the backtrace.
impl From<&anyhow::Error> for Fragment {
    fn from(err: &anyhow::Error) -> Self {
        Fragment::traced(err.to_string(), format!("Error: {:?}", err))
    }
}

impl From<anyhow::Error> for Fragment {
    fn from(err: anyhow::Error) -> Self {
        Fragment::from(&err)
    }
}

impl From<std::io::Error> for Fragment {
    fn from(err: std::io::Error) -> Self {
        Fragment::from_error(&err)
    }
}

macro_rules! display_fragment {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Fragment {
                fn from(v: $t) -> Self {
                    Fragment::Text(v.to_string())
                }
            }
        )*
    };
}

display_fragment!(char, bool, i32, i64, u32, u64, usize, f32, f64);

/// Join fragments with a single space
pub fn join_fragments<'a, I>(fragments: I, use_trace: bool) -> String
where
    I: IntoIterator<Item = &'a Fragment>,
{
    fragments
        .into_iter()
        .map(|f| f.render(use_trace))
        .collect::<Vec<_>>()
        .join(" ")
}
