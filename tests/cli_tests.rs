//! End-to-end tests driving the tcrdb binary over a small on-disk database.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const TRB_TSV: &str = "\
loci\tallele_name\tv_gene\tj_gene\tCDR3
A\tA-02:01\tTCRBV12-03\tTCRBJ02-07\tCASSPGASGYTY
A\tA-02:01\tTCRBV05-01\tTCRBJ02-07\tCASSLDRGSEQY
B\tB-07:02\tTCRBV12-03\tTCRBJ01-01\tCASSFGREQF
DQ\tDQ-01:02+04:01\tTCRBV28-01\tTCRBJ02-01\tCASSLRGNEQF
";

const MAPPING_CSV: &str = "\
species,imgt,adaptive
human,TRBV12-3,TCRBV12-03
human,TRBV5-1,TCRBV05-01
human,TRBJ2-7,TCRBJ02-07
human,TRBJ1-1,TCRBJ01-01
";

fn make_database() -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    let db_dir = dir.path().join("databases");
    std::fs::create_dir_all(&db_dir).unwrap();
    std::fs::write(db_dir.join("TRB_database.tsv"), TRB_TSV).unwrap();
    std::fs::write(dir.path().join("adaptive_imgt_mapping.csv"), MAPPING_CSV).unwrap();
    dir
}

fn tcrdb() -> Command {
    let mut cmd = Command::cargo_bin("tcrdb").unwrap();
    cmd.arg("--format").arg("tsv");
    cmd.env("NO_COLOR", "1");
    cmd
}

#[test]
fn test_allele_lookup() {
    let db = make_database();
    tcrdb()
        .args(["allele", "--chain", "trb", "A-02:01"])
        .arg("--database-dir")
        .arg(db.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("CASSPGASGYTY"))
        .stdout(predicate::str::contains("CASSLDRGSEQY"))
        .stdout(predicate::str::contains("CASSFGREQF").not());
}

#[test]
fn test_allele_lookup_composite_locus() {
    let db = make_database();
    tcrdb()
        .args(["allele", "--chain", "trb", "DQ-01:02+04:01"])
        .arg("--database-dir")
        .arg(db.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("CASSLRGNEQF"));
}

#[test]
fn test_allele_lookup_unknown_locus_lists_supported() {
    let db = make_database();
    tcrdb()
        .args(["allele", "--chain", "trb", "Z-99:99"])
        .arg("--database-dir")
        .arg(db.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("locus 'Z' is not supported"))
        .stderr(predicate::str::contains("\"A\""))
        .stderr(predicate::str::contains("\"B\""));
}

#[test]
fn test_allele_lookup_missing_database_file() {
    let db = make_database();
    // Only the beta database exists in the fixture
    tcrdb()
        .args(["allele", "--chain", "tra", "A-02:01"])
        .arg("--database-dir")
        .arg(db.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("TRA_database.tsv"));
}

#[test]
fn test_single_tcr_native_convention() {
    let db = make_database();
    // One substitution (Y -> F) against CASSPGASGYTY
    tcrdb()
        .args([
            "tcr",
            "--chain",
            "trb",
            "TCRBV12-03+CASSPGASGYTF+TCRBJ02-07:Adaptive",
        ])
        .arg("--database-dir")
        .arg(db.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("CASSPGASGYTY\t1"));
}

#[test]
fn test_single_tcr_imgt_conversion() {
    let db = make_database();
    // Beta database is Adaptive-native; IMGT names must be converted first
    tcrdb()
        .args([
            "tcr",
            "--chain",
            "trb",
            "TRBV12-3+CASSPGASGYTF+TRBJ2-7:IMGT",
        ])
        .arg("--database-dir")
        .arg(db.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("TRBV12-3\tTRBJ2-7\tCASSPGASGYTY\t1"));
}

#[test]
fn test_single_tcr_malformed_query_string() {
    let db = make_database();
    tcrdb()
        .args(["tcr", "--chain", "trb", "TCRBV12-03+CASSF"])
        .arg("--database-dir")
        .arg(db.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid TCR query"));
}

#[test]
fn test_single_tcr_unknown_convention() {
    let db = make_database();
    tcrdb()
        .args(["tcr", "--chain", "trb", "TCRBV12-03+CASSF+TCRBJ02-07:10x"])
        .arg("--database-dir")
        .arg(db.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("unsupported gene naming convention"));
}

#[test]
fn test_table_query_writes_output_file() {
    let db = make_database();
    let queries = db.path().join("queries.tsv");
    std::fs::write(
        &queries,
        "v_gene\tCDR3\tj_gene\nTCRBV12-03\tCASSPGASGYTF\tTCRBJ02-07\n",
    )
    .unwrap();
    let output = db.path().join("matches.tsv");

    tcrdb()
        .args(["table", "--chain", "trb", "--convention", "Adaptive"])
        .arg(&queries)
        .arg("--database-dir")
        .arg(db.path())
        .arg("--output")
        .arg(&output)
        .assert()
        .success();

    let written = std::fs::read_to_string(&output).unwrap();
    assert!(written.contains("query_CDR3"));
    assert!(written.contains("CASSPGASGYTY"));
    assert!(written.contains("CASSPGASGYTF"));
}

#[test]
fn test_table_query_no_shared_genes_succeeds_empty() {
    let db = make_database();
    let queries = db.path().join("queries.tsv");
    std::fs::write(&queries, "v_gene\tCDR3\tj_gene\nVX\tCASSF\tJX\n").unwrap();

    tcrdb()
        .args(["table", "--chain", "trb", "--convention", "Adaptive"])
        .arg(&queries)
        .arg("--database-dir")
        .arg(db.path())
        .assert()
        .success()
        .stderr(predicate::str::contains("No match found"));
}

#[test]
fn test_table_query_missing_columns() {
    let db = make_database();
    let queries = db.path().join("queries.tsv");
    std::fs::write(&queries, "v_gene\tj_gene\nTCRBV12-03\tTCRBJ02-07\n").unwrap();

    tcrdb()
        .args(["table", "--chain", "trb", "--convention", "Adaptive"])
        .arg(&queries)
        .arg("--database-dir")
        .arg(db.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("required columns"));
}
