use std::fs;
use std::path::Path;

use lazy_static::*;
use regex::Regex;
use sxd_document::dom::Element;
use sxd_document::parser as xml;

use crate::error::Error;
use crate::result::{Message, MessageLevel, Status, Step, StepKind, Suite, Test};
use crate::time::{elapsed_seconds, parse_timestamp};

lazy_static! {
    static ref GENERATOR_REGEX: Regex =
        Regex::new(r"^(?P<tool>[A-Za-z][A-Za-z ]*?)\s+(?P<version>\d[^\s]*)").unwrap();
}

/// A parsed result file: the root suite plus the file-level stamps from the
/// document element.
#[derive(Debug)]
pub struct RunResult {
    pub generator: String,
    pub generated_at: Option<chrono::NaiveDateTime>,
    pub suite: Suite,
}

/// Reads and parses a result file from disk.
pub fn parse_file(path: &Path) -> Result<RunResult, Error> {
    debug!("Reading result file {}", path.display());
    let content = fs::read_to_string(path)?;
    parse_str(content.as_str())
}

/// Parses a result document. Both the classic schema and the newer control
/// element shapes are accepted; unknown elements are skipped. Malformed XML
/// or a missing document root is a hard error.
pub fn parse_str(content: &str) -> Result<RunResult, Error> {
    let package = xml::parse(content).map_err(|err| Error::Parse(format!("{:?}", err)))?;
    let document = package.as_document();
    let robot = document
        .root()
        .children()
        .into_iter()
        .filter_map(|child| child.element())
        .find(|element| element.name().local_part() == "robot")
        .ok_or_else(|| Error::Parse("missing <robot> document element".to_owned()))?;

    let generator = attr(robot, "generator").unwrap_or_default().to_owned();
    match generator_info(generator.as_str()) {
        Some((tool, version)) => info!("Parsing result file produced by {} {}", tool, version),
        None => debug!("Result file carries no recognizable generator stamp"),
    }
    let generated_at = attr(robot, "generated").and_then(parse_timestamp);

    let suite = child_elements(robot)
        .into_iter()
        .find(|element| element.name().local_part() == "suite")
        .ok_or_else(|| Error::Parse("missing root <suite> element".to_owned()))?;

    Ok(RunResult {
        generator,
        generated_at,
        suite: parse_suite(suite),
    })
}

/// Splits a generator stamp like `Robot 4.1.2 (Python 3.8.10 on linux)`
/// into the tool name and its version.
pub fn generator_info(generator: &str) -> Option<(String, String)> {
    GENERATOR_REGEX
        .captures(generator.trim())
        .map(|captures| (captures["tool"].to_owned(), captures["version"].to_owned()))
}

fn parse_suite(element: Element) -> Suite {
    let mut suite = Suite::default();
    suite.name = attr(element, "name").unwrap_or_default().to_owned();
    suite.source = attr(element, "source").map(ToOwned::to_owned);
    for child in child_elements(element) {
        match child.name().local_part() {
            "suite" => suite.suites.push(parse_suite(child)),
            "test" => suite.tests.push(parse_test(child)),
            "kw" => {
                let step = parse_step(child);
                match step.kind {
                    StepKind::Setup => suite.setup = Some(step),
                    StepKind::Teardown => suite.teardown = Some(step),
                    _ => debug!(
                        "Ignoring non-fixture keyword '{}' directly under suite '{}'",
                        step.name, suite.name
                    ),
                }
            }
            "status" => {
                let parsed = parse_status_element(child);
                suite.status = parsed.status;
                suite.start_time = parsed.start;
                suite.end_time = parsed.end;
                suite.duration = parsed.duration;
            }
            "doc" | "metadata" | "meta" => {}
            other => debug!("Skipping <{}> in suite '{}'", other, suite.name),
        }
    }
    suite
}

fn parse_test(element: Element) -> Test {
    let mut test = Test::default();
    test.name = attr(element, "name").unwrap_or_default().to_owned();
    let mut tags = Vec::new();
    for child in child_elements(element) {
        if let Some(step) = parse_body_element(child) {
            test.steps.push(step);
            continue;
        }
        match child.name().local_part() {
            "tags" => tags.extend(texts_of(child, "tag")),
            "tag" => tags.push(text_of(child).unwrap_or_default()),
            "status" => {
                let parsed = parse_status_element(child);
                test.status = parsed.status;
                test.message = parsed.message;
                test.critical = parsed.critical;
                test.start_time = parsed.start;
                test.end_time = parsed.end;
                test.duration = parsed.duration;
            }
            "doc" | "timeout" => {}
            other => debug!("Skipping <{}> in test '{}'", other, test.name),
        }
    }
    test.tags = dedupe_tags(tags);
    test
}

/// Dispatches one element of an executable body. Returns `None` for
/// elements that are not steps.
fn parse_body_element(element: Element) -> Option<Step> {
    match element.name().local_part() {
        "kw" => Some(parse_step(element)),
        "for" => Some(parse_for(element)),
        "while" => Some(parse_while(element)),
        "if" => Some(parse_control(element, StepKind::If, "IF")),
        "try" => Some(parse_control(element, StepKind::Try, "TRY")),
        "iter" => Some(parse_iter(element)),
        "branch" => Some(parse_branch(element)),
        "return" | "break" | "continue" => Some(parse_simple_control(element)),
        _ => None,
    }
}

fn parse_step(element: Element) -> Step {
    let mut step = Step::default();
    step.name = attr(element, "name").unwrap_or_default().to_owned();
    step.library = attr(element, "library")
        .or_else(|| attr(element, "owner"))
        .map(ToOwned::to_owned);
    step.kind = attr(element, "type")
        .map(kind_from_marker)
        .unwrap_or(StepKind::Keyword);
    for child in child_elements(element) {
        if let Some(nested) = parse_body_element(child) {
            step.steps.push(nested);
            continue;
        }
        match child.name().local_part() {
            "arguments" => step.arguments.extend(texts_of(child, "arg")),
            "arg" => step.arguments.push(text_of(child).unwrap_or_default()),
            "assign" => step.assigned.extend(texts_of(child, "var")),
            "var" => step.assigned.push(text_of(child).unwrap_or_default()),
            "msg" => step.messages.push(parse_message(child)),
            "status" => apply_step_status(&mut step, child),
            "doc" | "timeout" | "tags" | "tag" => {}
            other => debug!("Skipping <{}> in step '{}'", other, step.name),
        }
    }
    step
}

fn parse_for(element: Element) -> Step {
    let mut step = Step::default();
    step.kind = StepKind::For;
    let flavor = attr(element, "flavor").unwrap_or("IN");
    let mut vars = Vec::new();
    let mut values = Vec::new();
    for child in child_elements(element) {
        if let Some(nested) = parse_body_element(child) {
            step.steps.push(nested);
            continue;
        }
        match child.name().local_part() {
            "var" => vars.push(text_of(child).unwrap_or_default()),
            "value" => values.push(text_of(child).unwrap_or_default()),
            "msg" => step.messages.push(parse_message(child)),
            "status" => apply_step_status(&mut step, child),
            other => debug!("Skipping <{}> in loop", other),
        }
    }
    step.name = if vars.is_empty() && values.is_empty() {
        "FOR".to_owned()
    } else {
        format!("{} {} {}", vars.join(", "), flavor, values.join(", "))
    };
    step
}

fn parse_while(element: Element) -> Step {
    let mut step = Step::default();
    step.kind = StepKind::While;
    step.name = attr(element, "condition").unwrap_or("WHILE").to_owned();
    for child in child_elements(element) {
        if let Some(nested) = parse_body_element(child) {
            step.steps.push(nested);
            continue;
        }
        match child.name().local_part() {
            "msg" => step.messages.push(parse_message(child)),
            "status" => apply_step_status(&mut step, child),
            other => debug!("Skipping <{}> in loop", other),
        }
    }
    step
}

fn parse_iter(element: Element) -> Step {
    let mut step = Step::default();
    step.kind = StepKind::Iteration;
    let mut assignments = Vec::new();
    for child in child_elements(element) {
        if let Some(nested) = parse_body_element(child) {
            step.steps.push(nested);
            continue;
        }
        match child.name().local_part() {
            "var" => {
                let value = text_of(child).unwrap_or_default();
                match attr(child, "name") {
                    Some(name) => assignments.push(format!("{} = {}", name, value)),
                    None => assignments.push(value),
                }
            }
            "msg" => step.messages.push(parse_message(child)),
            "status" => apply_step_status(&mut step, child),
            other => debug!("Skipping <{}> in iteration", other),
        }
    }
    step.name = if assignments.is_empty() {
        "ITERATION".to_owned()
    } else {
        assignments.join(", ")
    };
    step
}

fn parse_control(element: Element, kind: StepKind, label: &str) -> Step {
    let mut step = Step::default();
    step.kind = kind;
    step.name = label.to_owned();
    for child in child_elements(element) {
        if let Some(nested) = parse_body_element(child) {
            step.steps.push(nested);
            continue;
        }
        match child.name().local_part() {
            "msg" => step.messages.push(parse_message(child)),
            "status" => apply_step_status(&mut step, child),
            other => debug!("Skipping <{}> in {}", other, label),
        }
    }
    step
}

fn parse_branch(element: Element) -> Step {
    let mut step = Step::default();
    step.kind = StepKind::Branch;
    let branch_type = attr(element, "type").unwrap_or("BRANCH");
    step.name = match attr(element, "condition") {
        Some(condition) => format!("{} {}", branch_type, condition),
        None => branch_type.to_owned(),
    };
    for child in child_elements(element) {
        if let Some(nested) = parse_body_element(child) {
            step.steps.push(nested);
            continue;
        }
        match child.name().local_part() {
            "msg" => step.messages.push(parse_message(child)),
            "status" => apply_step_status(&mut step, child),
            "pattern" => {}
            other => debug!("Skipping <{}> in branch", other),
        }
    }
    step
}

fn parse_simple_control(element: Element) -> Step {
    let mut step = Step::default();
    step.kind = StepKind::Control;
    step.name = element.name().local_part().to_ascii_uppercase();
    for child in child_elements(element) {
        if let Some(nested) = parse_body_element(child) {
            step.steps.push(nested);
            continue;
        }
        match child.name().local_part() {
            "value" => step.arguments.push(text_of(child).unwrap_or_default()),
            "msg" => step.messages.push(parse_message(child)),
            "status" => apply_step_status(&mut step, child),
            other => debug!("Skipping <{}> in control statement", other),
        }
    }
    step
}

fn kind_from_marker(value: &str) -> StepKind {
    match value.trim().to_ascii_lowercase().as_str() {
        "kw" | "keyword" => StepKind::Keyword,
        "setup" => StepKind::Setup,
        "teardown" => StepKind::Teardown,
        "for" => StepKind::For,
        "while" => StepKind::While,
        "if" | "if/else" => StepKind::If,
        "try" => StepKind::Try,
        "foritem" | "for iteration" | "iteration" | "iter" => StepKind::Iteration,
        "branch" => StepKind::Branch,
        "return" | "break" | "continue" => StepKind::Control,
        other => {
            debug!("Unknown step type '{}', treated as a keyword", other);
            StepKind::Keyword
        }
    }
}

struct ParsedStatus {
    status: Status,
    start: Option<chrono::NaiveDateTime>,
    end: Option<chrono::NaiveDateTime>,
    duration: f64,
    message: String,
    critical: Option<bool>,
}

fn parse_status_element(element: Element) -> ParsedStatus {
    let status = attr(element, "status")
        .unwrap_or_default()
        .parse::<Status>()
        .unwrap_or_else(|err| {
            warn!("{}, treated as NOT RUN", err);
            Status::NotRun
        });
    let start = attr(element, "starttime")
        .or_else(|| attr(element, "start"))
        .and_then(parse_timestamp);
    let end = attr(element, "endtime").and_then(parse_timestamp);
    let elapsed = attr(element, "elapsed").and_then(|value| match value.trim().parse::<f64>() {
        Ok(seconds) => Some(seconds),
        Err(err) => {
            debug!("Cannot parse elapsed value '{}': {}", value, err);
            None
        }
    });
    ParsedStatus {
        status,
        start,
        end,
        duration: elapsed.unwrap_or_else(|| elapsed_seconds(&start, &end)),
        message: own_text(element),
        critical: attr(element, "critical").map(|value| value.eq_ignore_ascii_case("yes")),
    }
}

fn apply_step_status(step: &mut Step, element: Element) {
    let parsed = parse_status_element(element);
    step.status = parsed.status;
    step.duration = parsed.duration;
}

fn parse_message(element: Element) -> Message {
    let level_marker = attr(element, "level").unwrap_or("INFO");
    let mut html = attr(element, "html")
        .map(|value| value.eq_ignore_ascii_case("true") || value.eq_ignore_ascii_case("yes"))
        .unwrap_or(false);
    let level = if level_marker.eq_ignore_ascii_case("html") {
        html = true;
        MessageLevel::Info
    } else {
        MessageLevel::from_marker(level_marker).unwrap_or_else(|| {
            debug!("Unknown message level '{}', treated as INFO", level_marker);
            MessageLevel::Info
        })
    };
    Message {
        level,
        timestamp: attr(element, "timestamp")
            .or_else(|| attr(element, "time"))
            .and_then(parse_timestamp),
        text: own_text(element),
        html,
    }
}

fn attr<'d>(element: Element<'d>, name: &str) -> Option<&'d str> {
    element.attribute(name).map(|attribute| attribute.value())
}

fn child_elements(element: Element) -> Vec<Element> {
    element
        .children()
        .into_iter()
        .filter_map(|child| child.element())
        .collect()
}

fn own_text(element: Element) -> String {
    element
        .children()
        .into_iter()
        .filter_map(|child| child.text())
        .map(|text| text.text())
        .collect()
}

fn text_of(element: Element) -> Option<String> {
    let text = own_text(element);
    if text.is_empty() {
        None
    } else {
        Some(text)
    }
}

fn texts_of(element: Element, child_name: &str) -> Vec<String> {
    child_elements(element)
        .into_iter()
        .filter(|child| child.name().local_part() == child_name)
        .map(|child| text_of(child).unwrap_or_default())
        .collect()
}

fn dedupe_tags(tags: Vec<String>) -> Vec<String> {
    let mut seen: Vec<String> = Vec::new();
    let mut result = Vec::new();
    for tag in tags {
        let key = tag.to_lowercase();
        if !seen.contains(&key) {
            seen.push(key);
            result.push(tag);
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    const CLASSIC_RESULT: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<robot generator="Robot 4.1.2 (Python 3.8.10 on linux)" generated="20211028 18:14:27.821" rpa="false" schemaversion="2">
<suite id="s1" name="Shop" source="/tests/shop">
<suite id="s1-s1" name="Checkout" source="/tests/shop/checkout.robot">
<kw name="Open Connection" library="ShopLibrary" type="SETUP">
<status status="PASS" starttime="20211028 18:14:27.900" endtime="20211028 18:14:28.100"/>
</kw>
<test id="s1-s1-t1" name="Pay With Card" line="10">
<kw name="Start Payment" library="ShopLibrary">
<arguments><arg>visa</arg><arg>100</arg></arguments>
<assign><var>${receipt}</var></assign>
<msg timestamp="20211028 18:14:28.200" level="INFO">payment started</msg>
<status status="PASS" starttime="20211028 18:14:28.150" endtime="20211028 18:14:28.650"/>
</kw>
<tags><tag>critical</tag><tag>checkout</tag></tags>
<status status="PASS" starttime="20211028 18:14:28.150" endtime="20211028 18:14:29.150"/>
</test>
<status status="PASS" starttime="20211028 18:14:27.850" endtime="20211028 18:14:29.200"/>
</suite>
<status status="PASS" starttime="20211028 18:14:27.828" endtime="20211028 18:14:29.250"/>
</suite>
</robot>"#;

    const LEGACY_RESULT: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<robot generator="Robot 3.2.2 (Python 3.6.9 on linux)" generated="20201020 10:00:00.000">
<suite name="Legacy" source="/tests/legacy">
<test name="Loop Things">
<kw name="${i} IN RANGE [ 2 ]" type="for">
<kw name="${i} = 0" type="foritem">
<kw name="Log" library="BuiltIn">
<arguments><arg>iteration</arg></arguments>
<status status="PASS" starttime="20201020 10:00:01.000" endtime="20201020 10:00:01.100"/>
</kw>
<status status="PASS" starttime="20201020 10:00:01.000" endtime="20201020 10:00:01.150"/>
</kw>
<status status="PASS" starttime="20201020 10:00:00.900" endtime="20201020 10:00:01.200"/>
</kw>
<tags><tag>Smoke</tag><tag>smoke</tag></tags>
<status status="FAIL" starttime="20201020 10:00:00.800" endtime="20201020 10:00:01.300" critical="yes">Boom</status>
</test>
<status status="FAIL" starttime="20201020 10:00:00.500" endtime="20201020 10:00:01.400"/>
</suite>
</robot>"#;

    const MODERN_RESULT: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<robot generator="Robot 7.0 (Python 3.11.5 on linux)" generated="2023-09-21T14:31:46.862416" rpa="false" schemaversion="5">
<suite name="Modern" id="s1">
<test name="Branching" id="s1-t1">
<if>
<branch type="IF" condition="$x == 1">
<kw name="Do Thing" owner="Lib">
<arg>fast</arg>
<var>${out}</var>
<status status="PASS" start="2023-09-21T14:31:46.900000" elapsed="0.25"/>
</kw>
<status status="PASS" start="2023-09-21T14:31:46.900000" elapsed="0.3"/>
</branch>
<branch type="ELSE">
<status status="NOT RUN" start="2023-09-21T14:31:47.200000" elapsed="0.0"/>
</branch>
<status status="PASS" start="2023-09-21T14:31:46.890000" elapsed="0.35"/>
</if>
<status status="PASS" start="2023-09-21T14:31:46.880000" elapsed="0.4"/>
</test>
<status status="PASS" start="2023-09-21T14:31:46.870000" elapsed="0.5"/>
</suite>
</robot>"#;

    #[test]
    fn test_parsing_classic_result_file() {
        let run = parse_str(CLASSIC_RESULT).unwrap();
        assert!(run.generator.starts_with("Robot 4.1.2"));
        assert!(run.generated_at.is_some());

        let shop = &run.suite;
        assert_eq!(shop.name, "Shop");
        assert_eq!(shop.source.as_deref(), Some("/tests/shop"));
        assert_eq!(shop.status, Status::Pass);
        assert!((shop.duration - 1.422).abs() < 1e-9);
        assert_eq!(shop.suites.len(), 1);

        let checkout = &shop.suites[0];
        let setup = checkout.setup.as_ref().unwrap();
        assert_eq!(setup.name, "Open Connection");
        assert_eq!(setup.kind, StepKind::Setup);
        assert!((setup.duration - 0.2).abs() < 1e-9);

        let test = &checkout.tests[0];
        assert_eq!(test.name, "Pay With Card");
        assert_eq!(test.tags, vec!["critical", "checkout"]);
        assert!((test.duration - 1.0).abs() < 1e-9);
        assert!(test.critical.is_none());

        let step = &test.steps[0];
        assert_eq!(step.name, "Start Payment");
        assert_eq!(step.library.as_deref(), Some("ShopLibrary"));
        assert_eq!(step.arguments, vec!["visa", "100"]);
        assert_eq!(step.assigned, vec!["${receipt}"]);
        assert_eq!(step.messages.len(), 1);
        assert_eq!(step.messages[0].level, MessageLevel::Info);
        assert_eq!(step.messages[0].text, "payment started");
    }

    #[test]
    fn test_parsing_legacy_loop_markup() {
        let run = parse_str(LEGACY_RESULT).unwrap();
        let test = &run.suite.tests[0];

        assert_eq!(test.status, Status::Fail);
        assert_eq!(test.message, "Boom");
        assert_eq!(test.critical, Some(true));
        assert_eq!(test.tags, vec!["Smoke"]);

        let looping = &test.steps[0];
        assert_eq!(looping.kind, StepKind::For);
        let iteration = &looping.steps[0];
        assert_eq!(iteration.kind, StepKind::Iteration);
        let keyword = &iteration.steps[0];
        assert_eq!(keyword.kind, StepKind::Keyword);
        assert_eq!(keyword.library.as_deref(), Some("BuiltIn"));
        assert_eq!(keyword.arguments, vec!["iteration"]);
    }

    #[test]
    fn test_parsing_modern_control_markup() {
        let run = parse_str(MODERN_RESULT).unwrap();
        assert!(run.generated_at.is_some());

        let test = &run.suite.tests[0];
        assert!((test.duration - 0.4).abs() < 1e-9);

        let branching = &test.steps[0];
        assert_eq!(branching.kind, StepKind::If);
        assert_eq!(branching.name, "IF");
        assert_eq!(branching.steps.len(), 2);

        let taken = &branching.steps[0];
        assert_eq!(taken.kind, StepKind::Branch);
        assert_eq!(taken.name, "IF $x == 1");
        let keyword = &taken.steps[0];
        assert_eq!(keyword.library.as_deref(), Some("Lib"));
        assert_eq!(keyword.arguments, vec!["fast"]);
        assert_eq!(keyword.assigned, vec!["${out}"]);
        assert!((keyword.duration - 0.25).abs() < 1e-9);

        let skipped = &branching.steps[1];
        assert_eq!(skipped.name, "ELSE");
        assert_eq!(skipped.status, Status::NotRun);
    }

    #[test]
    fn test_parsing_while_loop_and_control_statements() {
        let xml = r#"<robot generator="Robot 7.0 (Python 3.11.5 on linux)">
<suite name="Loops">
<test name="Countdown">
<kw name="Count Down">
<while condition="$x &gt; 0" limit="10">
<iter>
<kw name="Decrement">
<status status="PASS" start="2023-09-21T14:31:47.000000" elapsed="0.1"/>
</kw>
<status status="PASS" start="2023-09-21T14:31:47.000000" elapsed="0.12"/>
</iter>
<status status="PASS" start="2023-09-21T14:31:46.990000" elapsed="0.2"/>
</while>
<return>
<value>${x}</value>
<status status="NOT RUN" start="2023-09-21T14:31:47.300000" elapsed="0.0"/>
</return>
<status status="PASS" start="2023-09-21T14:31:46.980000" elapsed="0.3"/>
</kw>
<status status="PASS" start="2023-09-21T14:31:46.970000" elapsed="0.35"/>
</test>
<status status="PASS" start="2023-09-21T14:31:46.960000" elapsed="0.4"/>
</suite>
</robot>"#;
        let run = parse_str(xml).unwrap();
        let keyword = &run.suite.tests[0].steps[0];

        let looping = &keyword.steps[0];
        assert_eq!(looping.kind, StepKind::While);
        assert_eq!(looping.name, "$x > 0");
        assert_eq!(looping.steps[0].kind, StepKind::Iteration);
        assert_eq!(looping.steps[0].steps[0].name, "Decrement");

        let returning = &keyword.steps[1];
        assert_eq!(returning.kind, StepKind::Control);
        assert_eq!(returning.name, "RETURN");
        assert_eq!(returning.arguments, vec!["${x}"]);
        assert_eq!(returning.status, Status::NotRun);
    }

    #[test]
    fn test_broken_xml_is_a_parse_error() {
        match parse_str("<robot><suite></robot>") {
            Err(Error::Parse(_)) => {}
            other => panic!("expected a parse error, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_document_element_is_a_parse_error() {
        match parse_str("<something-else/>") {
            Err(Error::Parse(message)) => assert!(message.contains("robot")),
            other => panic!("expected a parse error, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_root_suite_is_a_parse_error() {
        match parse_str(r#"<robot generator="Robot 4.0"></robot>"#) {
            Err(Error::Parse(message)) => assert!(message.contains("suite")),
            other => panic!("expected a parse error, got {:?}", other),
        }
    }

    #[test]
    fn test_not_available_timestamps_become_none() {
        let xml = r#"<robot generator="Robot 3.1">
<suite name="S">
<test name="T">
<status status="PASS" starttime="N/A" endtime="N/A"/>
</test>
<status status="PASS" starttime="N/A" endtime="N/A"/>
</suite>
</robot>"#;
        let run = parse_str(xml).unwrap();
        let test = &run.suite.tests[0];
        assert!(test.start_time.is_none());
        assert!(test.end_time.is_none());
        assert_eq!(test.duration, 0.0);
    }

    #[test]
    fn test_unknown_status_marker_degrades_to_not_run() {
        let xml = r#"<robot generator="Robot 4.0">
<suite name="S">
<test name="T">
<status status="EXPLODED" starttime="20211028 18:14:28.150" endtime="20211028 18:14:29.150"/>
</test>
<status status="PASS"/>
</suite>
</robot>"#;
        let run = parse_str(xml).unwrap();
        assert_eq!(run.suite.tests[0].status, Status::NotRun);
    }

    #[test]
    fn test_generator_probe() {
        assert_eq!(
            generator_info("Robot 4.1.2 (Python 3.8.10 on linux)"),
            Some(("Robot".to_owned(), "4.1.2".to_owned()))
        );
        assert_eq!(
            generator_info("Robot Framework 7.0"),
            Some(("Robot Framework".to_owned(), "7.0".to_owned()))
        );
        assert_eq!(generator_info("completely unversioned"), None);
    }

    #[test]
    fn test_parse_file_round_trip() {
        let path = std::env::temp_dir().join("abacus-parser-test.xml");
        std::fs::write(&path, CLASSIC_RESULT).unwrap();
        let run = parse_file(&path).unwrap();
        assert_eq!(run.suite.name, "Shop");
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_parse_file_reports_io_errors() {
        let path = std::env::temp_dir().join("abacus-no-such-file.xml");
        match parse_file(&path) {
            Err(Error::Io(_)) => {}
            other => panic!("expected an i/o error, got {:?}", other),
        }
    }
}
