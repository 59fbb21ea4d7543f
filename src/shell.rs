// SPDX: CC0-1.0

use anyhow::Context;
use core::fmt;
use std::io::{self, stdin, BufRead, Write};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    Help,
    Quit,
    SetFun,
    ListFun,
    ZoomIn,
    ZoomOut,
    Scroll,
    Reset,
    SetWin,
    Status,
    Plot,
}

impl Command {
    pub const fn exhaustive() -> &'static [Command] {
        &[
            Self::Help,
            Self::Quit,
            Self::SetFun,
            Self::ListFun,
            Self::ZoomIn,
            Self::ZoomOut,
            Self::Scroll,
            Self::Reset,
            Self::SetWin,
            Self::Status,
            Self::Plot,
        ]
    }

    pub const fn help(&self) -> &'static str {
        match self {
            Self::Help => "display help for each command",
            Self::Quit => "quit the shell",
            Self::SetFun => "choose the function to graph",
            Self::ListFun => "list the functions that can be graphed",
            Self::ZoomIn => "zoom in by one step",
            Self::ZoomOut => "zoom out by one step",
            Self::Scroll => "send a wheel event with the given vertical delta",
            Self::Reset => "return to the initial zoom level",
            Self::SetWin => "set surface parameters",
            Self::Status => "print the current view",
            Self::Plot => "write the current frame to an svg file",
        }
    }

    pub const fn name(&self) -> &'static str {
        match self {
            Self::Help => "help",
            Self::Quit => "quit",
            Self::SetFun => "fun",
            Self::ListFun => "list",
            Self::ZoomIn => "in",
            Self::ZoomOut => "out",
            Self::Scroll => "scroll",
            Self::Reset => "reset",
            Self::SetWin => "window",
            Self::Status => "status",
            Self::Plot => "plot",
        }
    }
}

impl core::str::FromStr for Command {
    type Err = ();
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::exhaustive()
            .iter()
            .find(|c| c.name() == s)
            .copied()
            .ok_or(())
    }
}

pub fn input<W: Write>(out: W, prompt: impl fmt::Display) -> anyhow::Result<String> {
    fn inner<W: Write>(mut out: W, prompt: impl fmt::Display) -> io::Result<String> {
        write!(out, "{prompt}")?;
        out.flush()?;
        let mut stdin = stdin().lock();
        let mut s = String::new();
        stdin.read_line(&mut s)?;
        Ok(s.trim().to_string())
    }

    let s = inner(out, prompt).context("read from standard input failed")?;
    Ok(s)
}

pub fn read_fromstr<W: Write, T: core::str::FromStr>(
    mut out: W,
    prompt: impl fmt::Display,
    ignore_empty: bool,
) -> anyhow::Result<Result<Option<T>, <T as core::str::FromStr>::Err>>
where
    <T as core::str::FromStr>::Err: fmt::Display,
{
    let input = input(&mut out, prompt)?;
    Ok(parse_reply(out, &input, ignore_empty)?)
}

/// Parses one line of user input, reporting a parse failure to `out`.
pub fn parse_reply<W: Write, T: core::str::FromStr>(
    mut out: W,
    input: &str,
    ignore_empty: bool,
) -> io::Result<Result<Option<T>, <T as core::str::FromStr>::Err>>
where
    <T as core::str::FromStr>::Err: fmt::Display,
{
    if ignore_empty && input.is_empty() {
        return Ok(Ok(None));
    }
    match input.parse::<T>() {
        Ok(new) => Ok(Ok(Some(new))),
        Err(err) => {
            writeln!(out)?;
            underline(&mut out, input)?;
            writeln!(out, "parse error: {err}")?;
            Ok(Err(err))
        }
    }
}

pub fn underline<W: Write>(mut out: W, src: &str) -> io::Result<()> {
    writeln!(out, "{src}")?;
    writeln!(out, "{}", "^".repeat(src.chars().count().max(1)))?;
    Ok(())
}

pub fn fun_undefined<W: Write>(mut out: W, name: &str) -> io::Result<()> {
    writeln!(out, "error: no function is named '{name}'")
}
