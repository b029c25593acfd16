/// Anything that can hand out a random display name such as
/// `admiring_turing`. The result is not yet a valid DNS label.
pub trait NameSource {
    fn random_name(&mut self) -> String;
}

impl<F> NameSource for F
where
    F: FnMut() -> String,
{
    fn random_name(&mut self) -> String {
        self()
    }
}
