use hn_scraper::{parse_entries, Entry, ScraperConfig, Session, INVALID_NUMBER};

const FRONT_PAGE: &str = include_str!("fixtures/front_page.html");

fn expected() -> Vec<Entry> {
    vec![
        Entry::new("Cisco Acquires Splunk", 1, 189, 363),
        Entry::new("Nippon Television has just acquired Studio Ghibli", 2, 59, 276),
        Entry::new("Why Kakoune", 3, 14, 47),
        Entry::new("They have genetic ALS. What should clinicians do?", 4, 7, 23),
        Entry::new("OpenBSD/ARM64 on Hetzner Cloud", 5, 97, 168),
        Entry::new("Launch HN: Loops (YC W22) – Email for SaaS Companies", 6, 43, 50),
        Entry::new("An INI Critique of TOML (2021)", 7, 62, 84),
        Entry::new(
            "Intel Xeon Max 9480 Deep-Dive 64GB HBM2e Onboard Like a GPU or AI Accelerator",
            8,
            38,
            77,
        ),
    ]
}

#[test]
fn test_extracts_requested_number_of_entries() {
    let entries = parse_entries(FRONT_PAGE, 8).unwrap();

    assert_eq!(entries.len(), 8);
    for (i, (actual, expected)) in entries.iter().zip(expected()).enumerate() {
        assert_eq!(*actual, expected, "entry at index {i}");
    }
}

#[test]
fn test_ranks_follow_page_order() {
    for limit in 1..=10 {
        let entries = parse_entries(FRONT_PAGE, limit).unwrap();
        let ranks: Vec<i64> = entries.iter().map(Entry::rank).collect();
        let expected: Vec<i64> = (1..=limit as i64).collect();
        assert_eq!(ranks, expected);
    }
}

#[test]
fn test_limit_above_page_size_returns_everything() {
    let entries = parse_entries(FRONT_PAGE, 30).unwrap();
    assert_eq!(entries.len(), 10);
}

#[test]
fn test_discuss_link_counts_as_zero_comments() {
    let entries = parse_entries(FRONT_PAGE, 10).unwrap();

    assert_eq!(
        entries[8],
        Entry::new("Guide to Searching & Annotating Text on Maps", 9, 0, 45)
    );
}

#[test]
fn test_job_posting_has_no_score() {
    let entries = parse_entries(FRONT_PAGE, 10).unwrap();
    let job = &entries[9];

    assert_eq!(job.title(), "Acme (YC S21) Is Hiring Rust Engineers");
    assert_eq!(job.rank(), 10);
    assert_eq!(job.comment_count(), 0);
    assert_eq!(job.score(), INVALID_NUMBER);
}

#[test]
fn test_session_over_fixture() {
    let config = ScraperConfig {
        max_entries: 3,
        ..ScraperConfig::default()
    };
    let mut session = Session::new(config).unwrap();

    let entries = session.load_html(FRONT_PAGE).unwrap();
    assert_eq!(entries, &expected()[..3]);
}

#[test]
fn test_display_of_extracted_entry() {
    let entries = parse_entries(FRONT_PAGE, 1).unwrap();
    assert_eq!(
        entries[0].to_string(),
        "<Entry(rank=1, title='Cisco Acquires Splunk', commentCount=189, score=363)>"
    );
}
