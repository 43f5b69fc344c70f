use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::common::{FormatArgs, GraphArgs, SolutionArgs};

#[derive(Parser)]
#[command(
    name = "slndeps",
    about = "Graph the project dependencies of a Visual Studio solution",
    long_about = "slndeps reads a Visual Studio solution file together with the .vcxproj and \
                  .csproj files it references, builds the dependency graph between the \
                  projects and writes it out as a Graphviz DOT description. Implied \
                  dependencies can be dropped with --simplify to keep large graphs readable.",
    subcommand_required = true,
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the graph description
    #[command(
        long_about = "Print the Graphviz DOT description of the solution's dependency graph to \
                      stdout, or to the file given with --output. Projects are drawn with a shape \
                      that reflects their build kind: folders for applications, ellipses for \
                      shared libraries, components for static libraries."
    )]
    Source {
        #[command(flatten)]
        solution: SolutionArgs,

        #[command(flatten)]
        graph: GraphArgs,

        /// Output file (stdout if not specified)
        #[arg(short, long, env = "SLNDEPS_OUTPUT")]
        output: Option<PathBuf>,
    },

    /// Write the graph description next to the solution
    #[command(
        long_about = "Write the Graphviz DOT description to a .gv file and print the dot command \
                      that renders it. The target defaults to the solution path with a .gv \
                      extension; a directory target receives a file named after the solution. \
                      The image format and layout engine are passed through to the printed \
                      command unchanged."
    )]
    Write {
        #[command(flatten)]
        solution: SolutionArgs,

        #[command(flatten)]
        graph: GraphArgs,

        /// Graph file or directory ('?' for the default)
        #[arg(short, long, env = "SLNDEPS_TARGET")]
        target: Option<String>,

        /// Image format for the render command ('?' for svg)
        #[arg(short, long, env = "SLNDEPS_IMAGE_FORMAT")]
        format: Option<String>,

        /// Graphviz layout engine for the render command ('?' for dot)
        #[arg(short, long, env = "SLNDEPS_STYLE")]
        style: Option<String>,
    },

    /// List the projects of a solution
    #[command(
        long_about = "List every project of the solution in declaration order with its build \
                      kind, identifier and resolved dependencies. Use --format json for output \
                      that other tools can consume."
    )]
    List {
        #[command(flatten)]
        solution: SolutionArgs,

        #[command(flatten)]
        format: FormatArgs,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, clap::ValueEnum)]
pub enum OutputFormat {
    Human,
    Json,
}
