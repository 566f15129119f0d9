use chrono::NaiveDate;
use rstest::rstest;
use version_recommend::version::clock::FixedClock;
use version_recommend::{RecommendError, VersionRecommender, VersionScheme};

const MKSH_TAGS: &[&str] = &[
    "19", "20", "21", "22", "23", "24", "24b", "24c", "25", "26", "26b", "26c", "27", "27d", "27e",
    "28", "29", "29b", "29c", "29d", "29e", "29f", "29g", "30", "31", "31b", "31c", "31d", "32",
    "33", "33b", "33c", "33d", "35", "35b", "36", "36b", "37", "37b", "37c", "38", "38b", "38c",
    "39", "39b", "39c", "40", "40b", "40c", "40d", "40e", "40f", "41", "41b", "41c", "42", "42b",
    "43", "44", "45", "46", "47", "48", "48b", "49", "50", "50b", "50c", "50d", "50e", "50f", "51",
    "52", "52b", "52c", "53", "53a", "54", "55", "56", "56b", "56c", "57", "58", "59", "59b",
    "59c",
];

const PKGCONF_TAGS: &[&str] = &[
    "0.1", "0.1.1", "0.2", "0.3", "0.4", "0.5", "0.5.1", "0.5.2", "0.5.3", "0.6", "0.7", "0.8",
    "0.8.1", "0.8.10", "0.8.11", "0.8.12", "0.8.2", "0.8.3", "0.8.4", "0.8.5", "0.8.6", "0.8.7",
    "0.8.8", "0.8.9", "0.9.0", "0.9.1", "0.9.10", "0.9.11", "0.9.12", "0.9.2", "0.9.3", "0.9.4",
    "0.9.5", "0.9.6", "0.9.7", "0.9.8", "0.9.9", "1", "1.0.1", "1.0.2", "1.1.0", "1.1.1", "1.2.0",
    "1.2.1", "1.2.2", "1.3.0", "1.3.1", "1.3.10", "1.3.11", "1.3.12", "1.3.2", "1.3.3", "1.3.4",
    "1.3.5", "1.3.6", "1.3.7", "1.3.8", "1.3.9", "1.3.90", "1.4.0", "1.4.1", "1.4.2", "1.5.1",
    "1.5.2", "1.5.3", "1.5.4", "1.6.0", "1.6.1", "1.6.2", "1.6.3", "1.7.0", "1.7.1", "1.7.2",
    "1.7.3",
];

const PYXATTR_TAGS: &[&str] = &[
    "0.1", "0.2.1", "0.2.2", "0.3.0", "0.4.0", "0.5.0", "0.7.0", "0.7.1",
];

const XYZW_TAGS: &[&str] = &["1.1.1.2", "1.1.1.3", "1.1.2.1", "1.1.2.2", "1.1.2.2.1", "2.1"];

fn recommender() -> VersionRecommender<FixedClock> {
    VersionRecommender::with_clock(FixedClock(NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()))
}

fn versions(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

#[rstest]
#[case::four_components(XYZW_TAGS, "1.1.2.1", VersionScheme::XYZW, "2.1", Some("1.1.2.2.1"))]
#[case::alphanumeric_suffixes(MKSH_TAGS, "56c", VersionScheme::X, "59", Some("56c"))]
#[case::current_is_latest(PKGCONF_TAGS, "1.7.3", VersionScheme::XYZ, "1.7.3", Some("1.7.3"))]
#[case::current_not_in_tags(PYXATTR_TAGS, "0.6.1", VersionScheme::XYZ, "0.7.1", Some("0.6.1"))]
fn recommend_matches_worked_examples(
    #[case] tags: &[&str],
    #[case] current: &str,
    #[case] scheme: VersionScheme,
    #[case] latest: &str,
    #[case] maintain: Option<&str>,
) {
    let result = recommender().recommend(&versions(tags), current).unwrap();

    assert_eq!(result.scheme, scheme);
    assert_eq!(result.latest_version, latest);
    assert_eq!(result.maintain_version.as_deref(), maintain);
}

#[test]
fn recommend_rejects_five_component_versions() {
    let err = recommender()
        .recommend(&versions(PKGCONF_TAGS), "1.2.3.4.5")
        .unwrap_err();

    assert_eq!(
        err,
        RecommendError::UnrecognizedVersionScheme {
            version: "1.2.3.4.5".to_string()
        }
    );
}

#[rstest]
#[case(XYZW_TAGS, "1.1.2.1")]
#[case(MKSH_TAGS, "56c")]
#[case(PKGCONF_TAGS, "1.5.2")]
#[case(PYXATTR_TAGS, "0.6.1")]
fn recommend_is_independent_of_tag_order(#[case] tags: &[&str], #[case] current: &str) {
    let mut tags = versions(tags);
    let expected = recommender().recommend(&tags, current).unwrap();

    tags.reverse();
    assert_eq!(recommender().recommend(&tags, current).unwrap(), expected);

    tags.sort();
    assert_eq!(recommender().recommend(&tags, current).unwrap(), expected);

    let third = tags.len() / 3;
    tags.rotate_left(third);
    assert_eq!(recommender().recommend(&tags, current).unwrap(), expected);
}

#[rstest]
#[case(XYZW_TAGS, "1.1.2.1")]
#[case(MKSH_TAGS, "56c")]
#[case(PKGCONF_TAGS, "1.5.2")]
#[case(PYXATTR_TAGS, "0.5.0")]
fn latest_is_a_candidate_and_maintain_stays_in_line(
    #[case] tags: &[&str],
    #[case] current: &str,
) {
    let tags = versions(tags);
    let result = recommender().recommend(&tags, current).unwrap();

    assert!(tags.contains(&result.latest_version));

    let maintain = result.maintain_version.unwrap();
    let line_len = result.scheme.major_line_len().unwrap();
    let prefix = |v: &str| {
        v.split(['.', '_', '-'])
            .take(line_len)
            .map(str::to_string)
            .collect::<Vec<_>>()
    };
    assert_eq!(prefix(&maintain), prefix(current));
}

#[test]
fn classification_is_stable_for_a_fixed_date() {
    let recommender = recommender();
    for version in ["1.2.3", "2020.03.15", "20200315", "56c", "1.2003.5", "2020a"] {
        let first = recommender.classify(version).unwrap();
        for _ in 0..3 {
            assert_eq!(recommender.classify(version).unwrap(), first);
        }
    }
}

#[test]
fn date_versions_become_unrecognized_before_their_release_date() {
    let before = VersionRecommender::with_clock(FixedClock(
        NaiveDate::from_ymd_opt(2020, 3, 14).unwrap(),
    ));
    let after = VersionRecommender::with_clock(FixedClock(
        NaiveDate::from_ymd_opt(2020, 3, 15).unwrap(),
    ));

    assert!(before.classify("20200315").is_err());
    assert_eq!(after.classify("20200315").unwrap(), VersionScheme::Yyyymmdd);
}
