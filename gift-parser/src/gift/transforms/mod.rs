//! Transform pipeline infrastructure
//!
//! Every parser stage is a [`Runnable`], and stages compose into a [`Transform`] whose
//! input and output types are checked at compile time:
//!
//! ```rust,ignore
//! let pipeline = Transform::from_fn(Ok)
//!     .then(DecodeSource::new(options.encodings.clone()))  // Vec<u8> → String
//!     .then(StripComments::new())                          // String  → String
//!     .then(SegmentBlocks::new())                          // String  → Vec<Block>
//!     .then(ParseBlocks::new(options));                    // Vec<Block> → ParseReport
//! ```
//!
//! The common chains are pre-built as lazy statics in [`standard`]; custom options go
//! through [`standard::pipeline`] and [`standard::string_pipeline`].
//!
//! - [`stages`]: the individual stages
//! - [`standard`]: pre-built combinations

pub mod stages;
pub mod standard;

use crate::gift::error::Result;

/// Trait for anything that can transform an input to an output
pub trait Runnable<I, O> {
    fn run(&self, input: I) -> Result<O>;
}

/// A composable transformation pipeline from `I` to `O`.
pub struct Transform<I, O> {
    run_fn: Box<dyn Fn(I) -> Result<O> + Send + Sync>,
}

impl<I, O> Transform<I, O> {
    /// Create a transform from a function
    pub fn from_fn<F>(f: F) -> Self
    where
        F: Fn(I) -> Result<O> + Send + Sync + 'static,
    {
        Transform {
            run_fn: Box::new(f),
        }
    }

    /// Chain a stage after this transform, extending the output type.
    pub fn then<O2, S>(self, stage: S) -> Transform<I, O2>
    where
        S: Runnable<O, O2> + Send + Sync + 'static,
        I: 'static,
        O: 'static,
        O2: 'static,
    {
        let prev_run = self.run_fn;
        Transform {
            run_fn: Box::new(move |input| {
                let intermediate = prev_run(input)?;
                stage.run(intermediate)
            }),
        }
    }

    /// Chain a pre-built static transform.
    pub fn then_transform<O2>(self, next: &'static Transform<O, O2>) -> Transform<I, O2>
    where
        I: 'static,
        O: 'static,
        O2: 'static,
    {
        let prev_run = self.run_fn;
        Transform {
            run_fn: Box::new(move |input| {
                let intermediate = prev_run(input)?;
                next.run(intermediate)
            }),
        }
    }

    pub fn run(&self, input: I) -> Result<O> {
        (self.run_fn)(input)
    }
}

impl<I, O> Runnable<I, O> for Transform<I, O>
where
    I: 'static,
    O: 'static,
{
    fn run(&self, input: I) -> Result<O> {
        Transform::run(self, input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gift::error::GiftError;

    struct Uppercase;
    impl Runnable<String, String> for Uppercase {
        fn run(&self, input: String) -> Result<String> {
            Ok(input.to_uppercase())
        }
    }

    struct CountLines;
    impl Runnable<String, usize> for CountLines {
        fn run(&self, input: String) -> Result<usize> {
            Ok(input.lines().count())
        }
    }

    struct FailingStage;
    impl Runnable<String, String> for FailingStage {
        fn run(&self, _input: String) -> Result<String> {
            Err(GiftError::StageFailed {
                stage: "failing".to_string(),
                message: "intentional failure".to_string(),
            })
        }
    }

    #[test]
    fn test_transform_from_fn() {
        let transform = Transform::from_fn(|s: String| Ok(s.len()));
        assert_eq!(transform.run("abc".to_string()).unwrap(), 3);
    }

    #[test]
    fn test_type_changing_chain() {
        let transform = Transform::from_fn(Ok).then(Uppercase).then(CountLines);
        assert_eq!(transform.run("a\nb\nc".to_string()).unwrap(), 3);
    }

    #[test]
    fn test_error_propagation() {
        let transform = Transform::from_fn(Ok)
            .then(Uppercase)
            .then(FailingStage)
            .then(CountLines);

        let err = transform.run("x".to_string()).unwrap_err();
        assert_eq!(err.to_string(), "Stage 'failing' failed: intentional failure");
    }

    #[test]
    fn test_transform_as_stage() {
        let inner = Transform::from_fn(Ok).then(Uppercase);
        let outer = Transform::from_fn(Ok).then(inner).then(CountLines);
        assert_eq!(outer.run("one\ntwo".to_string()).unwrap(), 2);
    }
}
