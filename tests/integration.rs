//! Integration tests: fixture generation, record semantics, and the
//! statement/byte builders the chunked strategies rely on. No live database
//! required.

use std::collections::HashSet;
use std::time::Duration;

use mysql_insert_bench::config::BenchConfig;
use mysql_insert_bench::fixture::{self, Person};
use mysql_insert_bench::report::StrategyRun;
use mysql_insert_bench::strategy::{self, load_data, multi_row, COLUMN_COUNT};

const SEED: u64 = 42;

// ── Fixture generator ───────────────────────────────────────────────

#[test]
fn generate_zero_records() {
    assert!(fixture::generate(0, SEED).is_empty());
}

#[test]
fn generate_exact_count_with_unique_ids() {
    let people = fixture::generate(1_000, SEED);
    assert_eq!(people.len(), 1_000);

    let ids: HashSet<_> = people.iter().map(|p| p.id).collect();
    assert_eq!(ids.len(), people.len());
}

#[test]
fn generated_fields_are_non_empty_and_ids_are_uuid_shaped() {
    for person in fixture::generate(3, SEED) {
        assert!(!person.first_name.is_empty());
        assert!(!person.last_name.is_empty());
        assert!(!person.street.is_empty());
        assert!(!person.city.is_empty());
        assert!(!person.state.is_empty());
        assert!(!person.postal_code.is_empty());

        let id = person.id.to_string();
        assert_eq!(id.len(), 36);
        for pos in [8, 13, 18, 23] {
            assert_eq!(id.as_bytes()[pos], b'-', "hyphen expected at {pos} in {id}");
        }
        // Version nibble follows the second hyphen.
        assert_eq!(id.as_bytes()[14], b'4', "v4 expected in {id}");
    }
}

#[test]
fn generation_is_deterministic_per_seed() {
    assert_eq!(fixture::generate(50, SEED), fixture::generate(50, SEED));
    assert_ne!(fixture::generate(50, SEED), fixture::generate(50, SEED + 1));
}

// ── Record semantics ────────────────────────────────────────────────

#[test]
fn same_fields_different_ids_are_unequal() {
    let a = Person::new("Ada", "Lovelace", "1 Analytical Way", "London", "LDN", "00001");
    let b = Person::new("Ada", "Lovelace", "1 Analytical Way", "London", "LDN", "00001");
    assert_ne!(a.id, b.id);
    assert_ne!(a, b);
}

#[test]
fn clone_is_structurally_equal() {
    let a = Person::new("Ada", "Lovelace", "1 Analytical Way", "London", "LDN", "00001");
    let b = a.clone();
    assert_eq!(a, b);

    let mut set = HashSet::new();
    set.insert(a);
    set.insert(b);
    assert_eq!(set.len(), 1);
}

// ── Strategy roster ─────────────────────────────────────────────────

#[test]
fn five_strategies_in_benchmark_order() {
    let names: Vec<_> = strategy::all(&BenchConfig::smoke())
        .iter()
        .map(|s| s.name())
        .collect();
    assert_eq!(
        names,
        [
            "row-by-row",
            "transaction",
            "multi-row-sql",
            "batched-bind",
            "load-data-infile",
        ]
    );
}

// ── Multi-row statement builder ─────────────────────────────────────

#[test]
fn batch_sql_single_row() {
    let sql = multi_row::batch_sql(1);
    assert!(sql.ends_with("VALUES (?, ?, ?, ?, ?, ?, ?)"), "got: {sql}");
}

#[test]
fn batch_sql_has_one_group_and_seven_placeholders_per_row() {
    for rows in [1, 2, 5, 100] {
        let sql = multi_row::batch_sql(rows);
        assert_eq!(sql.matches("(?").count(), rows, "groups for {rows} rows");
        assert_eq!(
            sql.matches('?').count(),
            rows * COLUMN_COUNT,
            "placeholders for {rows} rows"
        );
    }
}

// ── Infile encoding ─────────────────────────────────────────────────

#[test]
fn encode_rows_one_line_seven_fields_per_record() {
    let people = fixture::generate(3, SEED);
    let encoded = load_data::encode_rows(&people);

    let lines: Vec<_> = encoded
        .split(|&b| b == b'\n')
        .filter(|l| !l.is_empty())
        .collect();
    assert_eq!(lines.len(), 3);

    for (line, person) in lines.iter().zip(&people) {
        let fields: Vec<_> = line.split(|&b| b == b'\t').collect();
        assert_eq!(fields.len(), COLUMN_COUNT);
        assert_eq!(fields[0], person.id.to_string().as_bytes());
        assert_eq!(fields[1], person.first_name.as_bytes());
        assert_eq!(fields[6], person.postal_code.as_bytes());
    }
}

#[test]
fn encode_rows_escapes_tabs_newlines_backslashes() {
    let person = Person::new("Tab\there", "New\nline", "Back\\slash", "City", "State", "00001");
    let encoded = load_data::encode_rows(&[person]);

    // A single record stays a single line with exactly seven fields: the
    // embedded tab and newline must have been escaped, not emitted raw.
    let lines: Vec<_> = encoded
        .split(|&b| b == b'\n')
        .filter(|l| !l.is_empty())
        .collect();
    assert_eq!(lines.len(), 1);

    let fields: Vec<_> = lines[0].split(|&b| b == b'\t').collect();
    assert_eq!(fields.len(), COLUMN_COUNT);
    assert_eq!(fields[1], b"Tab\\there");
    assert_eq!(fields[2], b"New\\nline");
    assert_eq!(fields[3], b"Back\\\\slash");
}

#[test]
fn encode_empty_batch_is_empty() {
    assert!(load_data::encode_rows(&[]).is_empty());
}

// ── Config & report ─────────────────────────────────────────────────

#[test]
fn config_urls_parse() {
    for config in [BenchConfig::standard(), BenchConfig::smoke()] {
        assert!(
            mysql_async::Opts::from_url(&config.database_url).is_ok(),
            "bad url: {}",
            config.database_url
        );
    }
}

#[test]
fn smoke_config_is_smaller() {
    let smoke = BenchConfig::smoke();
    let standard = BenchConfig::standard();
    assert!(smoke.rows < standard.rows);
    assert!(smoke.multi_row_batch <= standard.multi_row_batch);
}

#[test]
fn report_metrics() {
    let baseline = StrategyRun {
        strategy: "row-by-row",
        rows: 1_000,
        elapsed: Duration::from_secs(4),
    };
    let run = StrategyRun {
        strategy: "load-data-infile",
        rows: 1_000,
        elapsed: Duration::from_secs(2),
    };

    assert_eq!(run.rows_per_sec(), 500.0);
    assert_eq!(run.elapsed_ms(), 2_000.0);
    assert_eq!(run.speedup_vs(&baseline), 2.0);
    assert_eq!(baseline.speedup_vs(&baseline), 1.0);
}
