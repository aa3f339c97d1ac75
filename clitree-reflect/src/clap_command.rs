//! [`LiveCommand`] for `clap` command trees.

use clap::{Arg, ArgAction};

use crate::{LiveCommand, LiveParam};

impl LiveCommand for clap::Command {
    fn name(&self) -> &str {
        self.get_name()
    }

    fn help(&self) -> Option<String> {
        self.get_about().map(ToString::to_string)
    }

    fn is_hidden(&self) -> bool {
        self.is_hide_set()
    }

    /// clap has no custom attributes, so the reflector default applies
    fn permission(&self) -> Option<String> {
        None
    }

    fn is_group(&self) -> bool {
        self.has_subcommands() || self.is_subcommand_required_set()
    }

    fn children(&self) -> Vec<&Self> {
        self.get_subcommands().collect()
    }

    fn params(&self) -> Vec<LiveParam> {
        self.get_arguments()
            .filter(|arg| !is_builtin(arg))
            .map(live_param)
            .collect()
    }
}

fn is_builtin(arg: &Arg) -> bool {
    matches!(
        arg.get_action(),
        ArgAction::Help | ArgAction::HelpShort | ArgAction::HelpLong | ArgAction::Version
    )
}

fn live_param(arg: &Arg) -> LiveParam {
    let value_type = Some(value_type(arg).to_string());
    let default = default_value(arg);
    let required = arg.is_required_set();

    if arg.is_positional() {
        LiveParam::Argument {
            name: arg.get_id().to_string(),
            value_type,
            default,
            required,
        }
    } else {
        LiveParam::Option {
            name: arg
                .get_long()
                .map(str::to_string)
                .unwrap_or_else(|| arg.get_id().to_string()),
            help: arg.get_help().map(ToString::to_string),
            value_type,
            default,
            required,
            // clap never prompts
            prompt: None,
        }
    }
}

fn value_type(arg: &Arg) -> &'static str {
    match arg.get_action() {
        ArgAction::SetTrue | ArgAction::SetFalse => return "BOOL",
        ArgAction::Count => return "INT",
        _ => {}
    }

    let possible: Vec<String> = arg
        .get_possible_values()
        .iter()
        .map(|value| value.get_name().to_string())
        .collect();
    if possible == ["true", "false"] {
        "BOOL"
    } else {
        "STRING"
    }
}

fn default_value(arg: &Arg) -> Option<String> {
    let values: Vec<String> = arg
        .get_default_values()
        .iter()
        .map(|value| value.to_string_lossy().into_owned())
        .collect();

    match values.as_slice() {
        [] => None,
        [single] if value_type(arg) == "BOOL" => Some(match single.as_str() {
            "true" => "True".to_string(),
            "false" => "False".to_string(),
            other => other.to_string(),
        }),
        _ => Some(values.join(" ")),
    }
}

#[cfg(test)]
mod tests {
    use clap::{Arg, ArgAction, Command, value_parser};

    use super::*;

    fn cli() -> Command {
        Command::new("tool")
            .about("A tool")
            .subcommand_required(true)
            .arg(Arg::new("verbose").long("verbose").action(ArgAction::SetTrue))
            .arg(Arg::new("level").short('l').action(ArgAction::Count))
            .subcommand(
                Command::new("copy")
                    .about("Copy files")
                    .hide(true)
                    .arg(Arg::new("src").required(true))
                    .arg(
                        Arg::new("mode")
                            .long("mode")
                            .help("Copy mode")
                            .default_value("fast"),
                    )
                    .arg(
                        Arg::new("force")
                            .long("force")
                            .value_parser(value_parser!(bool))
                            .default_value("true"),
                    ),
            )
    }

    #[test]
    fn test_node_surface() {
        let cli = cli();
        assert_eq!(LiveCommand::name(&cli), "tool");
        assert_eq!(LiveCommand::help(&cli).as_deref(), Some("A tool"));
        assert!(cli.is_group());
        assert_eq!(cli.children().len(), 1);

        let copy = cli.children()[0];
        assert!(!copy.is_group());
        assert!(LiveCommand::is_hidden(copy));
        assert_eq!(copy.permission(), None);
    }

    #[test]
    fn test_flag_types() {
        let params = cli().params();
        assert_eq!(params.len(), 2);
        assert!(matches!(
            &params[0],
            LiveParam::Option { name, value_type: Some(t), .. } if name == "verbose" && t == "BOOL"
        ));
        // No long name: falls back to the id
        assert!(matches!(
            &params[1],
            LiveParam::Option { name, value_type: Some(t), .. } if name == "level" && t == "INT"
        ));
    }

    #[test]
    fn test_positional_and_defaults() {
        let cli = cli();
        let params = cli.children()[0].params();

        assert_eq!(
            params[0],
            LiveParam::Argument {
                name: "src".into(),
                value_type: Some("STRING".into()),
                default: None,
                required: true,
            }
        );
        assert_eq!(
            params[1],
            LiveParam::Option {
                name: "mode".into(),
                help: Some("Copy mode".into()),
                value_type: Some("STRING".into()),
                default: Some("fast".into()),
                required: false,
                prompt: None,
            }
        );
        assert!(matches!(
            &params[2],
            LiveParam::Option { value_type: Some(t), default: Some(d), .. } if t == "BOOL" && d == "True"
        ));
    }

    #[test]
    fn test_help_and_version_are_skipped() {
        // Building adds the generated --help and --version arguments
        let mut cli = Command::new("tool").version("1.0").arg(Arg::new("x").long("x"));
        cli.build();

        let names: Vec<String> = cli.params().iter().map(|p| p.name().to_string()).collect();
        assert_eq!(names, ["x"]);
    }
}
