//! Fixture helpers shared by the integration tests

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

pub const CPP_TYPE: &str = "{8BC9CEB8-8B4A-11D0-8D11-00A0C91BC942}";
pub const CS_TYPE: &str = "{FAE04EC0-301F-11D3-BF4B-00C04F79EFBC}";

/// One `Project(...)` entry of a generated solution file
pub struct Entry<'a> {
    pub name: &'a str,
    pub path: &'a str,
    pub id: &'a str,
    pub deps: &'a [&'a str],
}

impl<'a> Entry<'a> {
    pub fn new(name: &'a str, path: &'a str, id: &'a str) -> Self {
        Self {
            name,
            path,
            id,
            deps: &[],
        }
    }

    pub fn with_deps(mut self, deps: &'a [&'a str]) -> Self {
        self.deps = deps;
        self
    }
}

pub fn solution_text(entries: &[Entry]) -> String {
    let mut text = String::from(
        "\nMicrosoft Visual Studio Solution File, Format Version 12.00\n# Visual Studio 15\n",
    );
    for entry in entries {
        let kind = if entry.path.ends_with(".csproj") {
            CS_TYPE
        } else {
            CPP_TYPE
        };
        text.push_str(&format!(
            "Project(\"{kind}\") = \"{}\", \"{}\", \"{}\"\n",
            entry.name, entry.path, entry.id
        ));
        if !entry.deps.is_empty() {
            text.push_str("\tProjectSection(ProjectDependencies) = postProject\n");
            for dep in entry.deps {
                text.push_str(&format!("\t\t{dep} = {dep}\n"));
            }
            text.push_str("\tEndProjectSection\n");
        }
        text.push_str("EndProject\n");
    }
    text.push_str("Global\nEndGlobal\n");
    text
}

pub fn write_solution(dir: &Path, file_name: &str, entries: &[Entry]) -> PathBuf {
    let path = dir.join(file_name);
    fs::write(&path, solution_text(entries)).unwrap();
    path
}

/// Write a file below `dir`, creating parent directories. `relative` uses `/`.
pub fn write_file(dir: &Path, relative: &str, content: &str) {
    let path = dir.join(relative);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

pub fn vcxproj(configuration_type: &str, references: &[&str]) -> String {
    let references: String = references
        .iter()
        .map(|id| {
            format!(
                "    <ProjectReference Include=\"..\\x\\x.vcxproj\">\n      \
                 <Project>{id}</Project>\n    </ProjectReference>\n"
            )
        })
        .collect();

    format!(
        r#"<?xml version="1.0" encoding="utf-8"?>
<Project DefaultTargets="Build" ToolsVersion="15.0" xmlns="http://schemas.microsoft.com/developer/msbuild/2003">
  <PropertyGroup Label="Configuration">
    <ConfigurationType>{configuration_type}</ConfigurationType>
  </PropertyGroup>
  <ItemGroup>
{references}  </ItemGroup>
</Project>
"#
    )
}

pub fn csproj(output_type: &str, references: &[&str]) -> String {
    let references: String = references
        .iter()
        .map(|id| {
            format!(
                "    <ProjectReference Include=\"..\\x\\x.csproj\">\n      \
                 <Project>{id}</Project>\n      <Name>x</Name>\n    </ProjectReference>\n"
            )
        })
        .collect();

    format!(
        r#"<?xml version="1.0" encoding="utf-8"?>
<Project ToolsVersion="4.0" xmlns="http://schemas.microsoft.com/developer/msbuild/2003">
  <PropertyGroup>
    <OutputType>{output_type}</OutputType>
  </PropertyGroup>
  <ItemGroup>
{references}  </ItemGroup>
</Project>
"#
    )
}

/// The edge lines of a rendered graph
pub fn edges(lines: &[String]) -> Vec<String> {
    lines
        .iter()
        .filter(|line| line.contains(" -> "))
        .map(|line| line.trim().to_string())
        .collect()
}
