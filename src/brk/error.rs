use derive_more::{Display, Error, From, IsVariant};

/// Why a terminal callback wants its traversal to end: a clean early stop, or a real failure.
///
/// [`Stop::Break`] is a control-flow signal only. Terminals catch it and report success; it must
/// never be presented to an end caller as an error. [`Stop::Fail`] carries the caller's own
/// error type outward, and `From` means `?` inside a callback lifts any `E` straight into it:
///
/// ```
/// use loop_lib::brk::{Stop, TryPull};
/// use loop_lib::pull::Pull;
/// use loop_lib::pull::slice::SlicePull;
///
/// let digits = ["3", "1", "4"];
/// let mut seen = Vec::new();
/// let outcome = SlicePull::new(&digits)
///     .fallible::<std::num::ParseIntError>()
///     .for_each(|d| {
///         let n: u32 = d.parse()?;
///         if n == 1 {
///             return Err(Stop::Break);
///         }
///         seen.push(n);
///         Ok(())
///     });
/// assert_eq!(outcome, Ok(()));
/// assert_eq!(seen, [3], "the break stops the traversal without failing it");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error, From, IsVariant)]
pub enum Stop<E> {
    /// End the traversal now; nothing went wrong.
    #[display("iteration stopped before exhaustion")]
    Break,
    /// End the traversal now and report this failure to the terminal's caller.
    #[display("{_0}")]
    Fail(E),
}

impl<E> Stop<E> {
    /// Extracts the failure, if this is one.
    pub fn fail(self) -> Option<E> {
        match self {
            Stop::Break => None,
            Stop::Fail(error) => Some(error),
        }
    }
}
