use crate::Misuse;

/// Tracks whether an adapter has been pulled from yet.
///
/// Adapters call [`Lifecycle::start`] on every pull and
/// [`Lifecycle::configure`] from every configuration method.
#[derive(Debug, Default, Clone, Copy)]
pub(crate) struct Lifecycle {
    started: bool,
}

impl Lifecycle {
    pub(crate) const fn new() -> Self {
        Self { started: false }
    }

    #[inline]
    pub(crate) fn start(&mut self) {
        self.started = true;
    }

    pub(crate) fn check(&self, adapter: &'static str, operation: &'static str) -> Result<(), Misuse> {
        if self.started {
            return Err(Misuse::ReconfiguredAfterStart { adapter, operation });
        }
        Ok(())
    }

    /// Panics if the adapter has already started.
    #[track_caller]
    pub(crate) fn configure(&self, adapter: &'static str, operation: &'static str) {
        if let Err(err) = self.check(adapter, operation) {
            panic!("{err}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn check_before_and_after_start() {
        let mut lifecycle = Lifecycle::new();
        assert!(lifecycle.check("TakeFirst", "set_bound").is_ok());

        lifecycle.start();
        assert_eq!(
            lifecycle.check("TakeFirst", "set_bound"),
            Err(Misuse::ReconfiguredAfterStart {
                adapter: "TakeFirst",
                operation: "set_bound",
            })
        );
    }

    #[test]
    #[should_panic(expected = "`Union::by` must be called before iteration begins")]
    fn configure_after_start_panics() {
        let mut lifecycle = Lifecycle::new();
        lifecycle.start();
        lifecycle.configure("Union", "by");
    }
}
