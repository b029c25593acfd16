use crate::core::names::sanitize_label;
use crate::core::render::render_services;
use crate::domain::model::{GenerationRequest, Service};
use crate::domain::ports::NameSource;
use crate::utils::error::{GeneratorError, Result};
use crate::utils::validation::is_dns_label;
use std::io::Write;

/// Single pass from a request to rendered YAML on a writer.
pub struct FixtureEngine<N: NameSource> {
    names: N,
    args: Vec<String>,
}

impl<N: NameSource> FixtureEngine<N> {
    /// `args` is the full argument vector recorded in the `# source:` header.
    pub fn new(names: N, args: Vec<String>) -> Self {
        Self { names, args }
    }

    /// `count` sanitized names, duplicates kept. Fails instead of aborting
    /// when `count` names cannot be allocated.
    pub fn generate_names(&mut self, count: usize) -> Result<Vec<String>> {
        let mut names: Vec<String> = Vec::new();
        names
            .try_reserve_exact(count)
            .map_err(|source| GeneratorError::CapacityError { count, source })?;
        names.extend((0..count).map(|_| sanitize_label(&self.names.random_name())));

        let invalid = names.iter().filter(|name| !is_dns_label(name)).count();
        if invalid > 0 {
            tracing::warn!("⚠️ {} generated names are not valid DNS labels", invalid);
        }

        Ok(names)
    }

    pub fn build_services(&mut self, request: &GenerationRequest) -> Result<Vec<Service>> {
        let selector = request.selector();
        Ok(self
            .generate_names(request.count)?
            .into_iter()
            .map(|name| Service::fixture(name, selector))
            .collect())
    }

    pub fn render(&mut self, request: &GenerationRequest) -> Result<String> {
        let services = self.build_services(request)?;
        render_services(self.args.as_slice(), &services)
    }

    /// Renders everything first, then writes it out in one go. Returns the
    /// number of documents written.
    pub fn run<W: Write>(&mut self, request: &GenerationRequest, mut out: W) -> Result<usize> {
        tracing::debug!(
            "Generating {} services (selector: {:?})",
            request.count,
            request.selector()
        );

        let rendered = self.render(request)?;
        out.write_all(rendered.as_bytes())?;
        out.flush()?;

        tracing::debug!("✅ Wrote {} services", request.count);
        Ok(request.count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::names::RandomNames;
    use std::io;

    struct BrokenPipe;

    impl Write for BrokenPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn args() -> Vec<String> {
        vec!["generator".to_string(), "services".to_string()]
    }

    #[test]
    fn test_duplicate_names_are_kept() {
        let mut engine = FixtureEngine::new(|| "same_name".to_string(), args());
        let names = engine.generate_names(3).unwrap();
        assert_eq!(names, vec!["same-name", "same-name", "same-name"]);
    }

    #[test]
    fn test_build_services_attaches_selector() {
        let mut engine = FixtureEngine::new(RandomNames::from_seed(1), args());
        let services = engine
            .build_services(&GenerationRequest::new(4, "web"))
            .unwrap();
        assert_eq!(services.len(), 4);
        assert!(services
            .iter()
            .all(|s| s.spec.selector.as_ref().map(|sel| sel.app.as_str()) == Some("web")));

        let services = engine
            .build_services(&GenerationRequest::new(4, ""))
            .unwrap();
        assert!(services.iter().all(|s| s.spec.selector.is_none()));
    }

    #[test]
    fn test_run_writes_everything() {
        let mut engine = FixtureEngine::new(RandomNames::from_seed(3), args());
        let mut out = Vec::new();
        let written = engine.run(&GenerationRequest::new(5, ""), &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert_eq!(written, 5);
        assert_eq!(text.lines().filter(|l| *l == "---").count(), 5);
        assert_eq!(text.lines().nth(1), Some("# source: generator services"));
    }

    #[test]
    fn test_run_reports_write_failure() {
        let mut engine = FixtureEngine::new(RandomNames::from_seed(3), args());
        let err = engine
            .run(&GenerationRequest::new(2, ""), BrokenPipe)
            .unwrap_err();
        assert!(matches!(err, GeneratorError::IoError(_)));
    }

    #[test]
    fn test_oversized_count_is_an_error() {
        let mut engine = FixtureEngine::new(|| "never_called".to_string(), args());
        let mut out = Vec::new();
        let err = engine
            .run(&GenerationRequest::new(usize::MAX, ""), &mut out)
            .unwrap_err();
        assert!(matches!(err, GeneratorError::CapacityError { count: usize::MAX, .. }));
        assert!(out.is_empty());
    }
}
