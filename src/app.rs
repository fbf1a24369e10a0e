use crate::cli::Cli;
use crate::context::AppContext;
use crate::error::AccessResult;
use crate::profile::ServiceProfile;
use crate::{logging, parse_with, template, validate};

pub fn run(cli: Cli) -> AccessResult<()> {
    logging::init(cli.verbose);

    let ctx = AppContext::bootstrap(cli);
    let profile = parse_with(&ctx.inputs, &ctx.loader)?;

    if ctx.check {
        validate::check(&profile, ctx.inputs.tag.as_ref())?;
    }

    if !ctx.templates.is_empty() {
        let rendered = ctx
            .templates
            .iter()
            .map(|raw| template::render(raw, &profile))
            .collect::<AccessResult<Vec<_>>>()?;
        return ctx.output.emit(&rendered.join("\n"), &rendered);
    }

    ctx.output.emit(&format_profile(&profile), &profile)
}

fn format_profile(profile: &ServiceProfile) -> String {
    let mut lines: Vec<String> = profile
        .entries()
        .map(|(key, value)| format!("{key} = {}", value.unwrap_or("<unset>")))
        .collect();
    lines.push(format!(
        "resolved_file = {}",
        profile.resolved_file().display()
    ));
    lines.push(format!("resolved_section = {}", profile.resolved_section()));
    lines.join("\n")
}
