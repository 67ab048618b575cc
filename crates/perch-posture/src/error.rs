use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PostureError {
    /// An endpoint coincides with the vertex, so the angle is undefined.
    /// Callers skip the frame; this is never fatal.
    DegenerateAngle,
}

impl fmt::Display for PostureError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PostureError::DegenerateAngle => {
                write!(f, "degenerate landmark triple: angle is undefined")
            }
        }
    }
}

impl std::error::Error for PostureError {}
