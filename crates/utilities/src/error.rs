use core::error::Error;
use core::fmt::Debug;
use core::fmt::Display;

/// The catch-all error type used by the tools. Any type implementing [`Error`]
/// (and `&str`/`String`) converts into it, and a backtrace is captured at the
/// point of conversion.
pub struct McnzError {
    inner: Box<InnerMcnzError>,
}

/// Boxed separately so that `Result<T, McnzError>` stays a single pointer wide.
struct InnerMcnzError {
    error: Box<dyn Error + Send + Sync + 'static>,
    backtrace: std::backtrace::Backtrace,
}

// Written against the boxed error so that `From<&str>` is covered as well.
impl<E> From<E> for McnzError
where
    Box<dyn Error + Send + Sync + 'static>: From<E>,
{
    #[cold]
    fn from(error: E) -> Self {
        McnzError {
            inner: Box::new(InnerMcnzError {
                error: error.into(),
                backtrace: std::backtrace::Backtrace::capture(),
            }),
        }
    }
}

impl Display for McnzError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.inner.error)
    }
}

impl Debug for McnzError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        writeln!(f, "{:?}", self.inner.error)?;

        let backtrace = &self.inner.backtrace;
        if let std::backtrace::BacktraceStatus::Captured = backtrace.status() {
            writeln!(f, "{backtrace}")?;
        }

        Ok(())
    }
}
