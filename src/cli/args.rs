use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Register a patch baseline for a patch group
    Associate(AssociateArgs),
    /// Check whether a stored association still exists remotely
    Status(StatusArgs),
    /// Deregister a patch baseline from a patch group
    Disassociate(DisassociateArgs),
    /// List every baseline-to-patch-group mapping
    List(ListArgs),
}

#[derive(clap::Args, Debug)]
pub struct AssociateArgs {
    /// Patch baseline identifier, e.g. pb-0c10e65780EXAMPLE
    #[arg(long)]
    pub baseline_id: String,

    /// Patch group label to register the baseline for
    #[arg(long)]
    pub patch_group: String,
}

#[derive(clap::Args, Debug)]
pub struct StatusArgs {
    /// Composite identifier, "<patch_group>:<baseline_id>"
    #[arg(long)]
    pub id: String,
}

#[derive(clap::Args, Debug)]
pub struct DisassociateArgs {
    #[arg(long)]
    pub baseline_id: String,

    #[arg(long)]
    pub patch_group: String,
}

#[derive(clap::Args, Debug)]
pub struct ListArgs {
    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq)]
pub enum OutputFormat {
    Table,
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_associate_args() {
        let cli = Cli::parse_from([
            "patchgroup",
            "associate",
            "--baseline-id=pb-1234",
            "--patch-group=group-A",
        ]);

        if let Command::Associate(args) = cli.command {
            assert_eq!(args.baseline_id, "pb-1234");
            assert_eq!(args.patch_group, "group-A");
        } else {
            panic!("Expected Associate command, got {:?}", cli.command);
        }
    }

    #[test]
    fn test_associate_requires_both_fields() {
        let result = Cli::try_parse_from(["patchgroup", "associate", "--baseline-id=pb-1234"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_status_args_composite_id() {
        let cli = Cli::parse_from(["patchgroup", "status", "--id=group-A:pb-1234"]);

        if let Command::Status(args) = cli.command {
            assert_eq!(args.id, "group-A:pb-1234");
        } else {
            panic!("Expected Status command, got {:?}", cli.command);
        }
    }

    #[test]
    fn test_disassociate_args() {
        let cli = Cli::parse_from([
            "patchgroup",
            "disassociate",
            "--baseline-id=pb-1234",
            "--patch-group=group-A",
        ]);

        if let Command::Disassociate(args) = cli.command {
            assert_eq!(args.baseline_id, "pb-1234");
            assert_eq!(args.patch_group, "group-A");
        } else {
            panic!("Expected Disassociate command, got {:?}", cli.command);
        }
    }

    #[test]
    fn test_list_format_defaults_to_table() {
        let cli = Cli::parse_from(["patchgroup", "list"]);

        if let Command::List(args) = cli.command {
            assert_eq!(args.format, OutputFormat::Table);
        } else {
            panic!("Expected List command, got {:?}", cli.command);
        }
    }

    #[test]
    fn test_list_format_json() {
        let cli = Cli::parse_from(["patchgroup", "list", "--format=json"]);

        if let Command::List(args) = cli.command {
            assert_eq!(args.format, OutputFormat::Json);
        } else {
            panic!("Expected List command, got {:?}", cli.command);
        }
    }
}
