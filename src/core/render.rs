use crate::domain::model::Service;
use crate::utils::error::Result;
use std::fmt::Write as _;

pub const HEADER: &str = "# autogenerated: do not edit!";
pub const DOCUMENT_SEPARATOR: &str = "---";

/// `# source:` followed by every argument, each preceded by a space.
pub fn source_line<S: AsRef<str>>(args: &[S]) -> String {
    let mut line = String::from("# source:");
    for arg in args {
        line.push(' ');
        line.push_str(arg.as_ref());
    }
    line
}

/// Renders the provenance header and one YAML document per service, each
/// document terminated by a `---` line (the last one included).
pub fn render_services<S: AsRef<str>>(args: &[S], services: &[Service]) -> Result<String> {
    let mut out = String::new();
    // String 的 fmt::Write 不會失敗
    let _ = writeln!(out, "{}", HEADER);
    let _ = writeln!(out, "{}", source_line(args));

    for service in services {
        let document = serde_yaml::to_string(service)?;
        out.push_str(&document);
        if !document.ends_with('\n') {
            out.push('\n');
        }
        out.push_str(DOCUMENT_SEPARATOR);
        out.push('\n');
    }

    tracing::debug!("Rendered {} service documents ({} bytes)", services.len(), out.len());
    Ok(out)
}
