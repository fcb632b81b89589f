//  Copyright (C) 2014-2022 Ryan Specialty Group, LLC.
//
//  This file is part of ELEMPARSE.
//
//  This program is free software: you can redistribute it and/or modify
//  it under the terms of the GNU General Public License as published by
//  the Free Software Foundation, either version 3 of the License, or
//  (at your option) any later version.
//
//  This program is distributed in the hope that it will be useful,
//  but WITHOUT ANY WARRANTY; without even the implied warranty of
//  MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
//  GNU General Public License for more details.
//
//  You should have received a copy of the GNU General Public License
//  along with this program.  If not, see <http://www.gnu.org/licenses/>.

use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::process::Command;

#[test]
fn invalid_argument() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::cargo_bin("elemparse")?;
    cmd.arg("-q");
    cmd.assert()
        .failure()
        .code(exitcode::USAGE)
        .stderr(predicate::str::contains("Unrecognized option:"));

    Ok(())
}

#[test]
fn missing_input_file() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::cargo_bin("elemparse")?;
    cmd.arg("--emit").arg("tree");
    cmd.assert()
        .failure()
        .code(exitcode::USAGE)
        .stderr(predicate::str::contains("INPUT"));

    Ok(())
}

#[test]
fn invalid_emit() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::cargo_bin("elemparse")?;
    cmd.arg("foobar.xsd");
    cmd.arg("--emit").arg("foo");
    cmd.assert()
        .failure()
        .code(exitcode::USAGE)
        .stderr(predicate::str::contains("--emit tree|xsd"));

    Ok(())
}

#[test]
fn help() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::cargo_bin("elemparse")?;
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("[OPTIONS] INPUT"));

    Ok(())
}

#[test]
fn input_file_does_not_exist() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::cargo_bin("elemparse")?;
    cmd.arg("foobar.xsd");
    cmd.assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("No such file or directory"));

    Ok(())
}

#[test]
fn malformed_input_file() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::cargo_bin("elemparse")?;
    cmd.arg("tests/data/unclosed.xml");
    cmd.arg("--emit").arg("tree");
    cmd.assert()
        .failure()
        .code(1)
        .stderr(predicate::str::starts_with("Error: Tree("));

    Ok(())
}

#[test]
fn emit_tree() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::cargo_bin("elemparse")?;
    cmd.arg("tests/data/person.xsd");
    cmd.arg("--emit").arg("tree");
    cmd.assert()
        .success()
        .stdout(predicate::str::starts_with(
            "- schema @ xmlns:xs=http://www.w3.org/2001/XMLSchema,\
             targetNamespace=urn:example:person,\
             elementFormDefault=qualified\n",
        ))
        .stdout(predicate::str::contains(
            "\n  - annotation\n    - documentation\n      # People and their names.\n",
        ))
        .stdout(predicate::str::contains(
            "\n      - minLength @ value=1\n",
        ));

    Ok(())
}

#[test]
fn emit_xsd_by_default() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::cargo_bin("elemparse")?;
    cmd.arg("tests/data/person.xsd");
    cmd.assert()
        .success()
        .stdout(predicate::str::starts_with("Schema {"))
        .stdout(predicate::str::contains("\"urn:example:person\""))
        .stdout(predicate::str::contains("\"People and their names.\""))
        .stdout(predicate::str::contains("Length {"));

    Ok(())
}

#[test]
fn unsupported_schema_item_fails_with_report(
) -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::cargo_bin("elemparse")?;
    cmd.arg("tests/data/unsupported.xsd");
    cmd.assert()
        .failure()
        .code(1)
        .stdout(predicate::str::starts_with("Remaining items (1 children)\n"))
        .stdout(predicate::str::contains("  group @ name=unsupported\n"))
        .stdout(predicate::str::contains("No matching variant (4 tried)"))
        .stdout(predicate::str::contains(
            "fatal: failed to parse `tests/data/unsupported.xsd`",
        ));

    Ok(())
}
