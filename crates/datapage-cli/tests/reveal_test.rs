mod common;

use common::TestFixture;
use predicates::prelude::*;

#[test]
fn test_reveal_link_on_empty_query() {
    let fixture = TestFixture::new();

    fixture
        .command()
        .args(["reveal", "--url", "/datasets/1", "--dimension", "dim_1"])
        .assert()
        .success()
        .stdout("/datasets/1?showAll=dim_1#dim_1\n");
}

#[test]
fn test_reveal_keeps_sibling_dimension() {
    let fixture = TestFixture::new();

    fixture
        .command()
        .args([
            "reveal",
            "--url",
            "/datasets/1?showAll=dim_2#dim_2",
            "--dimension",
            "dim_1",
        ])
        .assert()
        .success()
        .stdout("/datasets/1?showAll=dim_2&showAll=dim_1#dim_1\n");
}

#[test]
fn test_reveal_json() {
    let fixture = TestFixture::new();

    let output = fixture
        .command()
        .args([
            "--format",
            "json",
            "reveal",
            "--url",
            "/datasets/1?showAll=dim_1",
            "--dimension",
            "dim_1",
        ])
        .output()
        .expect("Failed to run datapage");

    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["content"]["action"], "collapse");
    assert_eq!(json["content"]["href"], "/datasets/1#dim_1");
}

#[test]
fn test_reveal_rejects_empty_dimension() {
    let fixture = TestFixture::new();

    fixture
        .command()
        .args(["reveal", "--url", "/datasets/1", "--dimension", ""])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Dimension ID must not be empty"));
}
