use super::*;
use crate::props::model::{Corner, LanguageStat, Planet, ProductivityPoint, Weekday};
use crate::timeline::config::{
    ISSUES_EXIT_DURATION, OPENING_SCENE_LENGTH, TOP_LANGUAGES_EXIT_DURATION,
};

fn props(languages: Option<Vec<LanguageStat>>) -> UnwrappedProps {
    UnwrappedProps {
        corner: Corner::BottomRight,
        top_languages: languages,
        show_helper_line: true,
        login: "octocat".to_string(),
        planet: Planet::Gold,
        stars_given: 5,
        issues_closed: 3,
        issues_opened: 9,
        top_weekday: Weekday::Friday,
        total_pull_requests: 11,
        top_hour: 22,
        graph_data: vec![ProductivityPoint {
            time: 0,
            productivity: 1.0,
        }],
    }
}

fn rust_only() -> Option<Vec<LanguageStat>> {
    Some(vec![LanguageStat::new("Rust", 100.0)])
}

fn ids(t: &Timeline) -> Vec<SceneId> {
    t.scenes.iter().map(|s| s.id).collect()
}

#[test]
fn series_order_with_planets() {
    let t = plan_timeline(
        &props(rust_only()),
        &TimelineConfig::default(),
        &PlanetTiming::default(),
    );
    assert_eq!(
        ids(&t),
        [
            SceneId::Opening,
            SceneId::TopLanguages,
            SceneId::Issues,
            SceneId::StarsAndProductivity,
            SceneId::PullRequests,
            SceneId::Contributions,
            SceneId::Landing,
        ]
    );
}

#[test]
fn planets_scene_is_structurally_absent_without_languages() {
    for langs in [None, Some(Vec::new())] {
        let series = compose_series(
            &props(langs),
            &TimelineConfig::default(),
            &PlanetTiming::default(),
        );
        assert_eq!(series.len(), 6);
        assert!(series.iter().all(|s| s.id() != SceneId::TopLanguages));
    }
}

#[test]
fn placement_with_one_language() {
    let t = plan_timeline(
        &props(rust_only()),
        &TimelineConfig::default(),
        &PlanetTiming::default(),
    );
    let r = |id| t.scene(id).unwrap().range;
    assert_eq!(r(SceneId::Opening), FrameRange::with_len(FrameIndex(0), 130));
    assert_eq!(
        r(SceneId::TopLanguages),
        FrameRange::with_len(FrameIndex(130), 150)
    );
    assert_eq!(r(SceneId::Issues), FrameRange::with_len(FrameIndex(265), 180));
    assert_eq!(
        r(SceneId::StarsAndProductivity),
        FrameRange::with_len(FrameIndex(425), 400)
    );
    assert_eq!(
        r(SceneId::PullRequests),
        FrameRange::with_len(FrameIndex(825), 240)
    );
    assert_eq!(
        r(SceneId::Contributions),
        FrameRange::with_len(FrameIndex(1065), 210)
    );
    assert_eq!(r(SceneId::Landing), FrameRange::with_len(FrameIndex(1275), 210));
    assert_eq!(t.duration_frames(), 1485);
}

struct CountingPlanets {
    seen: std::cell::Cell<Option<usize>>,
}

impl PlanetDurations for CountingPlanets {
    fn duration_of_all_planets(&self, languages: &[LanguageStat], _fps: Fps) -> u64 {
        self.seen.set(Some(languages.len()));
        100
    }
}

#[test]
fn planet_durations_see_every_usable_language() {
    let langs = ["Rust", "Go", "C", "Zig", "Nim"]
        .into_iter()
        .map(|n| LanguageStat::new(n, 10.0))
        .chain(std::iter::once(LanguageStat::new(" ", 5.0)))
        .collect();
    let planets = CountingPlanets {
        seen: std::cell::Cell::new(None),
    };
    let t = plan_timeline(&props(Some(langs)), &TimelineConfig::default(), &planets);

    assert_eq!(planets.seen.get(), Some(5));
    let scene = t.scene(SceneId::TopLanguages).unwrap();
    assert_eq!(scene.duration_frames(), 100);
    match &scene.props {
        SceneProps::TopLanguages { languages, .. } => {
            let names: Vec<_> = languages.iter().map(|l| l.name.as_str()).collect();
            assert_eq!(names, ["Rust", "Go", "C"]);
        }
        other => panic!("unexpected props: {other:?}"),
    }
    assert_eq!(t.duration_frames(), 1370 + 100 - 15);
}

#[test]
fn always_policy_shifts_issues_into_opening_without_planets() {
    let t = plan_timeline(
        &props(None),
        &TimelineConfig::with_policy(OverlapPolicy::Always),
        &PlanetTiming::default(),
    );
    let issues = t.scene(SceneId::Issues).unwrap();
    assert_eq!(issues.offset_frames, -(TOP_LANGUAGES_EXIT_DURATION as i64));
    assert_eq!(
        issues.range.start,
        FrameIndex(OPENING_SCENE_LENGTH - TOP_LANGUAGES_EXIT_DURATION)
    );
    let opening = t.scene(SceneId::Opening).unwrap();
    assert_eq!(
        opening.range.overlap_frames(issues.range),
        TOP_LANGUAGES_EXIT_DURATION
    );
    assert_eq!(t.duration_frames(), 1335);
}

#[test]
fn when_adjacent_policy_starts_issues_after_opening_without_planets() {
    let t = plan_timeline(
        &props(None),
        &TimelineConfig::with_policy(OverlapPolicy::WhenAdjacent),
        &PlanetTiming::default(),
    );
    let issues = t.scene(SceneId::Issues).unwrap();
    assert_eq!(issues.offset_frames, 0);
    assert_eq!(issues.range.start, FrameIndex(OPENING_SCENE_LENGTH));
    assert_eq!(t.duration_frames(), 1350);
}

#[test]
fn policies_agree_when_planets_are_present() {
    let p = props(rust_only());
    let a = calculate_duration_with(
        &p,
        &TimelineConfig::with_policy(OverlapPolicy::Always),
        &PlanetTiming::default(),
    );
    let b = calculate_duration_with(
        &p,
        &TimelineConfig::with_policy(OverlapPolicy::WhenAdjacent),
        &PlanetTiming::default(),
    );
    assert_eq!(a, b);
}

#[test]
fn stars_always_overlap_issues_exit() {
    for langs in [None, rust_only()] {
        let t = plan_timeline(
            &props(langs),
            &TimelineConfig::default(),
            &PlanetTiming::default(),
        );
        let issues = t.scene(SceneId::Issues).unwrap().range;
        let stars = t.scene(SceneId::StarsAndProductivity).unwrap().range;
        assert_eq!(issues.overlap_frames(stars), ISSUES_EXIT_DURATION);
    }
}

#[test]
fn active_at_reports_overlapping_scenes() {
    let t = plan_timeline(
        &props(rust_only()),
        &TimelineConfig::default(),
        &PlanetTiming::default(),
    );
    let at = |f| {
        t.active_at(FrameIndex(f))
            .into_iter()
            .map(|s| s.id)
            .collect::<Vec<_>>()
    };
    assert_eq!(at(0), [SceneId::Opening]);
    assert_eq!(at(270), [SceneId::TopLanguages, SceneId::Issues]);
    assert_eq!(at(430), [SceneId::Issues, SceneId::StarsAndProductivity]);
    assert_eq!(at(1484), [SceneId::Landing]);
    assert!(at(1485).is_empty());
}

#[test]
fn scene_props_route_input_fields() {
    let t = plan_timeline(
        &props(rust_only()),
        &TimelineConfig::default(),
        &PlanetTiming::default(),
    );
    assert_eq!(
        t.scene(SceneId::Issues).unwrap().props,
        SceneProps::Issues {
            open_issues: 9,
            closed_issues: 3,
        }
    );
    assert_eq!(
        t.scene(SceneId::Landing).unwrap().props,
        SceneProps::Landing {
            planet: Planet::Gold
        }
    );
    match &t.scene(SceneId::TopLanguages).unwrap().props {
        SceneProps::TopLanguages {
            corner,
            languages,
            show_helper_line,
            login,
        } => {
            assert_eq!(*corner, Corner::BottomRight);
            assert_eq!(languages.len(), 1);
            assert!(*show_helper_line);
            assert_eq!(login, "octocat");
        }
        other => panic!("unexpected props {other:?}"),
    }
    match &t.scene(SceneId::StarsAndProductivity).unwrap().props {
        SceneProps::StarsAndProductivity {
            stars_given,
            top_hour,
            show_cockpit,
            show_dots,
            ..
        } => {
            assert_eq!(*stars_given, 5);
            assert_eq!(*top_hour, 22);
            assert!(*show_cockpit);
            assert!(!*show_dots);
        }
        other => panic!("unexpected props {other:?}"),
    }
}

#[test]
fn negative_offset_past_zero_is_clamped() {
    let series = vec![
        SceneSpec::new(10, SceneProps::Opening),
        SceneSpec::new(20, SceneProps::Contributions).overlapping(50),
    ];
    let t = Timeline::from_series(Fps::default(), "a.mp3", series.clone());
    assert_eq!(
        t.scene(SceneId::Contributions).unwrap().range,
        FrameRange::with_len(FrameIndex(0), 20)
    );
    assert_eq!(t.duration_frames(), 20);

    let err = Timeline::from_series_strict(Fps::default(), "a.mp3", series).unwrap_err();
    assert!(matches!(err, UnwrappedError::Timeline(_)));
}

#[test]
fn duration_matches_placed_timeline() {
    for langs in [None, Some(Vec::new()), rust_only()] {
        for policy in [OverlapPolicy::Always, OverlapPolicy::WhenAdjacent] {
            let p = props(langs.clone());
            let cfg = TimelineConfig::with_policy(policy);
            let planets = PlanetTiming::default();
            assert_eq!(
                calculate_duration_with(&p, &cfg, &planets),
                plan_timeline(&p, &cfg, &planets).duration_frames()
            );
        }
    }
}

#[test]
fn metadata_reports_duration_at_video_fps() {
    let m = calculate_metadata(&props(rust_only()));
    assert_eq!(m.duration_in_frames, 1485);
    assert_eq!(m.fps, Fps::new(30, 1).unwrap());
    let json = serde_json::to_value(m).unwrap();
    assert_eq!(json["durationInFrames"], 1485);
}

#[test]
fn timeline_json_names_scenes() {
    let t = plan_timeline(
        &props(None),
        &TimelineConfig::default(),
        &PlanetTiming::default(),
    );
    let v: serde_json::Value = serde_json::from_str(&t.to_json_pretty().unwrap()).unwrap();
    assert_eq!(v["soundtrack"], "smartsound-wired.mp3");
    assert_eq!(v["duration_frames"], 1335);
    assert_eq!(v["scenes"][0]["id"], "opening");
    assert_eq!(v["scenes"][1]["props"]["scene"], "issues");
    assert!((t.duration_secs() - 44.5).abs() < 1e-9);
}
