//! Behaviour-driven step definitions driving the recommend CLI scenarios.

use super::helpers::{recommend_request_json, workspace, write_json_fixture, write_utf8};
use super::*;
use crate::recommend::{
    DefaultRankerBuilder, RankerBuilder, RecommendConfig, RecommendResponse, run_recommend_with,
};
use camino::Utf8PathBuf;
use drape_core::Ranker;
use drape_core::test_support::{ConstantScorer, sample_catalog};
use drape_fusion::FusionError;
use drape_ranker::CompatibilityRanker;
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};
use std::cell::RefCell;
use tempfile::TempDir;

#[derive(Debug)]
struct RecommendWorld {
    _tmp: TempDir,
    request_path: Utf8PathBuf,
    include_request: RefCell<bool>,
    constant_ranker: RefCell<bool>,
    cli_args: RefCell<Vec<String>>,
    stdout: RefCell<Vec<u8>>,
    result: RefCell<Option<Result<(), CliError>>>,
}

impl RecommendWorld {
    fn new() -> Self {
        let (tmp, root) = workspace();
        Self {
            _tmp: tmp,
            request_path: root.join("request.json"),
            include_request: RefCell::new(true),
            constant_ranker: RefCell::new(false),
            cli_args: RefCell::new(Vec::new()),
            stdout: RefCell::new(Vec::new()),
            result: RefCell::new(None),
        }
    }

    fn build_command_line(&self) -> Vec<String> {
        let mut argv = vec!["drape".to_owned(), "recommend".to_owned()];
        if *self.include_request.borrow() {
            argv.push(self.request_path.as_str().to_owned());
        }
        argv.extend(self.cli_args.borrow().iter().cloned());
        argv
    }

    fn response(&self) -> RecommendResponse {
        let borrowed = self.result.borrow();
        let result = borrowed.as_ref().expect("result recorded");
        if let Err(err) = result {
            panic!("expected success, found {err:?}");
        }
        let stdout = String::from_utf8(self.stdout.borrow().clone()).expect("stdout utf-8");
        serde_json::from_str(&stdout).expect("output should be a JSON recommend response")
    }

    fn error(&self) -> String {
        let borrowed = self.result.borrow();
        match borrowed.as_ref().expect("result recorded") {
            Ok(()) => panic!("expected failure"),
            Err(err) => format!("{err:?}"),
        }
    }
}

#[fixture]
fn world() -> RecommendWorld {
    RecommendWorld::new()
}

struct ConstantRankerBuilder;

impl RankerBuilder for ConstantRankerBuilder {
    fn build(&self, _config: &RecommendConfig) -> Box<dyn Ranker> {
        Box::new(CompatibilityRanker::new(ConstantScorer(0.5)))
    }
}

#[given("a valid recommend request exists on disk")]
fn valid_request_exists(#[from(world)] world: &RecommendWorld) {
    write_json_fixture(&world.request_path, &recommend_request_json("happy"));
}

#[given("a recommend request with an unrecognised mood exists on disk")]
fn unknown_mood_request_exists(#[from(world)] world: &RecommendWorld) {
    write_json_fixture(&world.request_path, &recommend_request_json("grumpy"));
}

#[given("the recommend request contains invalid JSON")]
fn request_contains_invalid_json(#[from(world)] world: &RecommendWorld) {
    write_utf8(&world.request_path, b"{ not valid json");
}

#[given("I omit the recommend request path")]
fn omit_request_path(#[from(world)] world: &RecommendWorld) {
    world.include_request.replace(false);
}

#[given("I ask for the top 2 items")]
fn ask_for_two(#[from(world)] world: &RecommendWorld) {
    world
        .cli_args
        .borrow_mut()
        .extend([format!("--{ARG_TOP_K}"), "2".to_owned()]);
}

#[given("I allow fallback for unknown input")]
fn allow_fallback(#[from(world)] world: &RecommendWorld) {
    world
        .cli_args
        .borrow_mut()
        .extend([format!("--{ARG_UNKNOWN_INPUT}"), "fallback".to_owned()]);
}

#[given("the ranker scores every item equally")]
fn constant_ranker(#[from(world)] world: &RecommendWorld) {
    world.constant_ranker.replace(true);
}

#[when("I run the recommend command")]
fn run_recommend_command(#[from(world)] world: &RecommendWorld) {
    let invocation = world.build_command_line();
    let parsed = Cli::try_parse_from(invocation).map_err(CliError::from);
    let outcome = parsed.and_then(|cli| match cli.command {
        Command::Recommend(args) => {
            let mut buffer = world.stdout.borrow_mut();
            if *world.constant_ranker.borrow() {
                run_recommend_with(args, &ConstantRankerBuilder, &mut *buffer)
            } else {
                run_recommend_with(args, &DefaultRankerBuilder, &mut *buffer)
            }
        }
        Command::Stress(_) => panic!("expected recommend command"),
    });
    world.result.replace(Some(outcome));
}

#[then("the command succeeds with a stress index of 6")]
#[expect(
    clippy::float_arithmetic,
    reason = "assertions compare floating point values"
)]
fn succeeds_with_stress_six(#[from(world)] world: &RecommendWorld) {
    let response = world.response();
    assert!((response.stress_index - 6.0).abs() < 1e-9);
}

#[then("2 ranked items are printed in descending score order")]
fn two_ranked_items(#[from(world)] world: &RecommendWorld) {
    let response = world.response();
    assert_eq!(response.results.len(), 2);
    assert!(
        response
            .results
            .windows(2)
            .all(|pair| matches!(pair, [a, b] if a.score >= b.score))
    );
}

#[then("the printed items follow catalog order")]
fn follows_catalog_order(#[from(world)] world: &RecommendWorld) {
    let response = world.response();
    let printed: Vec<String> = response.results.into_iter().map(|r| r.item.id).collect();
    let expected: Vec<String> = sample_catalog().into_iter().map(|item| item.id).collect();
    assert_eq!(printed, expected);
}

#[then("the command fails because the mood is unknown")]
fn fails_unknown_mood(#[from(world)] world: &RecommendWorld) {
    let borrowed = world.result.borrow();
    match borrowed.as_ref().expect("result recorded") {
        Err(CliError::Fusion(FusionError::UnknownMood(err))) => assert_eq!(err.raw, "grumpy"),
        other => panic!("expected UnknownMood, found {other:?}"),
    }
}

#[then("the command fails because the request JSON is invalid")]
fn fails_invalid_json(#[from(world)] world: &RecommendWorld) {
    let error = world.error();
    assert!(error.starts_with("ParseRequest"), "found {error}");
}

#[then("the command fails because the request path is missing")]
fn fails_missing_request_path(#[from(world)] world: &RecommendWorld) {
    let borrowed = world.result.borrow();
    match borrowed.as_ref().expect("result recorded") {
        Err(CliError::MissingArgument { field, .. }) => assert_eq!(*field, ARG_RECOMMEND_REQUEST),
        other => panic!("expected MissingArgument, found {other:?}"),
    }
}

macro_rules! register_recommend_scenario {
    ($fn_name:ident, $scenario_title:literal) => {
        #[scenario(
            path = "tests/features/recommend_command.feature",
            name = $scenario_title
        )]
        fn $fn_name(#[from(world)] world: RecommendWorld) {
            let _ = world;
        }
    };
}

register_recommend_scenario!(recommend_happy_path, "recommending outfits from a JSON request");
register_recommend_scenario!(recommend_unknown_mood, "rejecting an unrecognised mood");
register_recommend_scenario!(recommend_mood_fallback, "falling back on an unrecognised mood");
register_recommend_scenario!(recommend_injected_ranker, "ranking with an injected ranker");
register_recommend_scenario!(recommend_invalid_json, "rejecting invalid JSON input");
register_recommend_scenario!(recommend_missing_request, "rejecting missing request paths");
