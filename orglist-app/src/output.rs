use colored::Colorize;
use orglist_lib::{Rate, Repo};
use std::io::{Result as IoResult, Write};

const DIVIDER_WIDTH: usize = 35;
const LABEL_WIDTH: usize = 14;

/// Writes one labelled block per repository, each preceded by a divider, and a closing
/// divider that is written even when there are no repositories.
pub fn write_repos<W>(out: &mut W, repos: &[Repo], styled: bool) -> IoResult<()>
where
    W: Write,
{
    let divider = "-".repeat(DIVIDER_WIDTH);
    for repo in repos {
        writeln!(out, "{divider}")?;
        write_field(out, "Name:", &repo.name, styled)?;
        write_field(out, "Link:", &repo.html_url, styled)?;
        write_field(out, "Clone (SSH):", &repo.ssh_url, styled)?;
        write_field(out, "Clone (HTTPS):", &repo.clone_url, styled)?;
    }
    writeln!(out, "{divider}")
}

pub fn write_rate_limits<W>(out: &mut W, rate: &Rate) -> IoResult<()>
where
    W: Write,
{
    writeln!(out, "GitHub API Limits:")?;
    writeln!(out, "Limit: {}", rate.limit)?;
    writeln!(out, "Remaining: {}", rate.remaining)
}

fn write_field<W>(out: &mut W, label: &str, value: &str, styled: bool) -> IoResult<()>
where
    W: Write,
{
    // Pad before styling so escape codes don't count towards the width.
    let label = format!("{label:>LABEL_WIDTH$}");
    if styled {
        writeln!(out, "{} {}", label.bold(), value)
    } else {
        writeln!(out, "{label} {value}")
    }
}
