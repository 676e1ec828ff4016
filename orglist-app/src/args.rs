use crate::error::AppError;
use clap::Parser;
use orglist_lib::DEFAULT_API_URL;

const AFTER_HELP: &str = "\
Requires a personal access token be placed in $HOME/.gittoken
    https://github.com/settings/tokens

Required token scope:
    repo:status, repo_deployment, public_repo, repo:invite, read:org";

#[derive(Debug, Parser)]
#[clap(
    name = "orglist",
    about = "List repositories that exist within a private organization on GitHub",
    after_help = AFTER_HELP,
    disable_version_flag = true
)]
pub struct Args {
    #[clap(short = 'L', long = "limits", help = "Print your GitHub API limits")]
    pub limits: bool,

    #[clap(
        short = 'v',
        long = "version",
        help = "Display the version of this utility"
    )]
    pub version: bool,

    #[clap(
        long = "api-url",
        help = "GitHub REST API base URL",
        env = "ORGLIST_GITHUB_API_URL",
        default_value = DEFAULT_API_URL
    )]
    pub api_url: String,

    #[clap(value_name = "ORGNAME", help = "GitHub organization to list")]
    pub organizations: Vec<String>,
}

impl Args {
    /// The single organization named on the command line.
    pub fn organization(&self) -> Result<&str, AppError> {
        match self.organizations.as_slice() {
            [organization] => Ok(organization.as_str()),
            _ => Err(AppError::Usage),
        }
    }
}
