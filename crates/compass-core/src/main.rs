//! `compass` command-line interface
//!
//! Inspects a catalog, evaluates policies and preset switches, and resolves
//! queries from the shell.

use anyhow::{bail, Context};
use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use compass_core::telemetry::init_tracing;
use compass_core::{CompassConfig, NavigationEngine};
use compass_ontology::{
    catalog, Capability, CapabilityGate, CapabilitySet, Domain, EntityType, IntentTag, Preset,
    Scope,
};
use compass_policy::{allowed_targets, effective_policy, switch_preset};
use compass_resolver::Query;
use serde_json::json;
use std::path::PathBuf;

fn cli() -> Command {
    Command::new("compass")
        .version(compass_core::VERSION)
        .about("Navigation and view-policy ontology engine")
        .subcommand_required(true)
        .arg(
            Arg::new("config")
                .long("config")
                .global(true)
                .value_parser(value_parser!(PathBuf))
                .help("TOML configuration file"),
        )
        .arg(
            Arg::new("json")
                .long("json")
                .global(true)
                .action(ArgAction::SetTrue)
                .help("Output as JSON"),
        )
        .arg(
            Arg::new("log-json")
                .long("log-json")
                .global(true)
                .action(ArgAction::SetTrue)
                .help("Write log events to stderr as JSON lines"),
        )
        .subcommand(
            Command::new("nodes")
                .about("List nodes visible with a capability set")
                .arg(caps_arg())
                .arg(
                    Arg::new("domain")
                        .long("domain")
                        .value_parser(value_parser!(Domain))
                        .help("Only nodes of this domain"),
                ),
        )
        .subcommand(
            Command::new("policy")
                .about("Show the effective policy of a node under a preset")
                .arg(Arg::new("node").required(true).help("Node id"))
                .arg(
                    Arg::new("preset")
                        .long("preset")
                        .value_parser(value_parser!(Preset))
                        .help("Requested preset (default: the node's default preset)"),
                ),
        )
        .subcommand(
            Command::new("resolve")
                .about("Resolve a query to a node and deep link")
                .arg(Arg::new("text").long("text").help("Free-text query"))
                .arg(
                    Arg::new("intent")
                        .long("intent")
                        .value_parser(value_parser!(IntentTag))
                        .help("Explicit intent"),
                )
                .arg(
                    Arg::new("entity")
                        .long("entity")
                        .action(ArgAction::Append)
                        .value_parser(value_parser!(EntityType))
                        .help("Entity hint (repeatable)"),
                )
                .arg(
                    Arg::new("scope")
                        .long("scope")
                        .action(ArgAction::Append)
                        .help("Scope parameter as key=value (repeatable)"),
                )
                .arg(caps_arg()),
        )
        .subcommand(
            Command::new("switch")
                .about("Evaluate a preset switch")
                .arg(
                    Arg::new("from")
                        .long("from")
                        .required(true)
                        .value_parser(value_parser!(Preset)),
                )
                .arg(
                    Arg::new("to")
                        .long("to")
                        .required(true)
                        .value_parser(value_parser!(Preset)),
                ),
        )
        .subcommand(
            Command::new("validate")
                .about("Load and validate a catalog")
                .arg(
                    Arg::new("catalog")
                        .long("catalog")
                        .value_parser(value_parser!(PathBuf))
                        .help("Catalog file (default: configured or embedded catalog)"),
                ),
        )
}

fn caps_arg() -> Arg {
    Arg::new("caps")
        .long("caps")
        .value_delimiter(',')
        .action(ArgAction::Append)
        .value_parser(value_parser!(Capability))
        .help("Granted capabilities, comma separated (default: all)")
}

fn granted(args: &ArgMatches) -> CapabilitySet {
    match args.get_many::<Capability>("caps") {
        Some(caps) => caps.copied().collect(),
        None => CapabilitySet::all(),
    }
}

fn scope(args: &ArgMatches) -> anyhow::Result<Scope> {
    let mut scope = Scope::new();
    for pair in args.get_many::<String>("scope").into_iter().flatten() {
        let Some((key, value)) = pair.split_once('=') else {
            bail!("scope parameter '{pair}' is not key=value");
        };
        scope.insert(key.trim(), value);
    }
    Ok(scope)
}

fn print_json(value: &impl serde::Serialize) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let matches = cli().get_matches();
    let json = matches.get_flag("json");

    let config = match matches.get_one::<PathBuf>("config") {
        Some(path) => CompassConfig::load(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => CompassConfig::default(),
    };
    let log_json = config.log_json || matches.get_flag("log-json");
    init_tracing(&config.log_filter, log_json)?;

    match matches.subcommand() {
        Some(("nodes", args)) => {
            let engine = NavigationEngine::from_config(&config)?;
            let granted = granted(args);
            let gate = CapabilityGate::new(engine.registry());
            let nodes = match args.get_one::<Domain>("domain") {
                Some(domain) => gate.visible_in_domain(*domain, &granted),
                None => gate.visible_nodes(&granted),
            };

            if json {
                print_json(&nodes)?;
            } else {
                for node in nodes {
                    println!(
                        "{:<16} {:>4}  {:<12} {}",
                        node.node_id,
                        node.priority,
                        node.domain.as_str(),
                        node.route
                    );
                }
            }
        }
        Some(("policy", args)) => {
            let engine = NavigationEngine::from_config(&config)?;
            let node_id = args.get_one::<String>("node").map(String::as_str).unwrap_or_default();
            let node = engine.registry().get(node_id)?;
            let preset = args.get_one::<Preset>("preset").copied().unwrap_or(node.default_preset);
            let effective = effective_policy(node, preset);

            if json {
                print_json(&json!({
                    "node_id": node.node_id,
                    "requested": preset,
                    "source": effective.source,
                    "policy": effective.policy,
                }))?;
            } else {
                let policy = effective.policy;
                println!("Node:        {}", node.node_id);
                println!("Preset:      {preset} ({:?})", effective.source);
                println!("Density:     {:?}", policy.density);
                println!("Right panel: {:?}", policy.default_right_panel_state);
                for (key, value) in &policy.default_filters {
                    println!("Filter:      {key} = {value:?}");
                }
                if !policy.hidden_columns.is_empty() {
                    println!("Hidden:      {}", policy.hidden_columns.join(", "));
                }
                if !policy.highlighted_metrics.is_empty() {
                    println!("Metrics:     {}", policy.highlighted_metrics.join(", "));
                }
                for action in &policy.suggested_actions {
                    let requires = action
                        .required_capability
                        .map(|c| c.to_string())
                        .unwrap_or_default();
                    let marker = if action.mutating { " [mutating]" } else { "" };
                    println!("Action:      {} {requires}{marker}", action.key);
                }
            }
        }
        Some(("resolve", args)) => {
            let engine = NavigationEngine::from_config(&config)?;
            let mut query = Query::new();
            if let Some(text) = args.get_one::<String>("text") {
                query = query.with_text(text.as_str());
            }
            if let Some(intent) = args.get_one::<IntentTag>("intent") {
                query = query.with_intent(*intent);
            }
            for entity in args.get_many::<EntityType>("entity").into_iter().flatten() {
                query = query.with_entity(*entity);
            }
            let scope = scope(args)?;
            let resolution = engine.resolve(&query, &scope, &granted(args))?;

            if json {
                print_json(&json!({
                    "node_id": resolution.node.node_id,
                    "link": resolution.link,
                    "score": resolution.score,
                }))?;
            } else {
                println!(
                    "{} ({}) -> {}",
                    resolution.node.node_id, resolution.score, resolution.link
                );
            }
        }
        Some(("switch", args)) => {
            let (Some(from), Some(to)) =
                (args.get_one::<Preset>("from"), args.get_one::<Preset>("to"))
            else {
                bail!("both --from and --to are required");
            };
            let switch = switch_preset(*from, *to)?;

            if json {
                print_json(&switch)?;
            } else {
                println!(
                    "{} -> {} (read-only: {})",
                    switch.previous, switch.next, switch.read_only
                );
                let targets: Vec<String> = allowed_targets(switch.next)
                    .iter()
                    .map(ToString::to_string)
                    .collect();
                println!("Next targets: {}", targets.join(", "));
            }
        }
        Some(("validate", args)) => {
            let registry = match args.get_one::<PathBuf>("catalog") {
                Some(path) => catalog::load_path(path)?,
                None => config.load_registry()?,
            };
            let without_default: Vec<&str> = registry
                .iter()
                .filter(|node| !node.has_default_policy())
                .map(|node| node.node_id.as_str())
                .collect();

            if json {
                print_json(&json!({
                    "nodes": registry.len(),
                    "without_default_policy": without_default,
                }))?;
            } else {
                println!("Catalog OK: {} nodes", registry.len());
                for node_id in without_default {
                    println!(
                        "  note: '{node_id}' has no policy for its default preset; baseline applies"
                    );
                }
            }
        }
        _ => {}
    }

    Ok(())
}
