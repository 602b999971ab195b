use crate::cli::commands::{parse_id, usage};
use crate::cli::context::{CommandResult, ShellContext};
use crate::cli::output;
use crate::cli::registry::CommandEntry;
use crate::render::format_price;

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![
        CommandEntry::new("services", "List bookable services", "services", cmd_services),
        CommandEntry::new(
            "service",
            "Choose the service to book",
            "service [id]",
            cmd_service,
        ),
        CommandEntry::new(
            "providers",
            "List providers able to perform the chosen service",
            "providers",
            cmd_providers,
        ),
        CommandEntry::new(
            "provider",
            "Choose who performs the service",
            "provider [id]",
            cmd_provider,
        ),
    ]
}

fn cmd_services(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    context.show_services();
    Ok(())
}

fn cmd_providers(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    context.show_providers();
    Ok(())
}

fn cmd_service(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let id = match args.first() {
        Some(raw) => parse_id(raw, "service")?,
        None => {
            let wizard = context.wizard();
            let ids: Vec<u32> = wizard.catalog().services().iter().map(|s| s.id).collect();
            let labels: Vec<String> = wizard
                .catalog()
                .services()
                .iter()
                .map(|service| {
                    format!(
                        "{} {} ({} min, {})",
                        service.icon,
                        service.name,
                        service.duration_minutes,
                        format_price(service.price, wizard.currency())
                    )
                })
                .collect();
            match context.pick("Service", &labels)? {
                Some(index) => ids[index],
                None => return Err(usage("service <id>")),
            }
        }
    };

    context.wizard.select_service(id)?;
    if let Some(service) = context.wizard().state().service() {
        output::success(format!("Service: {}", service.name));
    }
    Ok(())
}

fn cmd_provider(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let id = match args.first() {
        Some(raw) => parse_id(raw, "provider")?,
        None => {
            let eligible = context.wizard().eligible_providers();
            let ids: Vec<u32> = eligible.iter().map(|p| p.id).collect();
            let labels: Vec<String> = eligible
                .iter()
                .map(|provider| format!("{} {}", provider.initials, provider.name))
                .collect();
            match context.pick("Provider", &labels)? {
                Some(index) => ids[index],
                None => return Err(usage("provider <id>")),
            }
        }
    };

    context.wizard.select_provider(id)?;
    if let Some(provider) = context.wizard().state().provider() {
        output::success(format!("Provider: {}", provider.name));
    }
    Ok(())
}
