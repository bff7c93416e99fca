//! Placement scenarios: a request plus the outcome it should produce, written
//! as a few lines of text (see `scenario.pest`).

use std::fmt;
use std::path::Path;

use glam::dvec2;
use miette::{IntoDiagnostic, SourceSpan, WrapErr};
use pest::Parser;
use pest::iterators::Pair;
use pest_derive::Parser;

use crate::engine::place;
use crate::errors::{PlacementError, ScenarioError, SourceContext};
use crate::request::{PlacementOptions, PlacementRequest, PlacementResult};
use crate::types::{Rect, Side, check_finite};

#[derive(Parser)]
#[grammar = "scenario.pest"]
struct ScenarioParser;

/// Offsets closer than this to the expected value count as equal.
pub const TOLERANCE: f64 = 1e-9;

/// What a scenario says placement should do.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Expectation {
    Placed {
        side: Side,
        horizontal: f64,
        vertical: f64,
    },
    NoFit,
    /// The request is malformed and `place` must refuse it.
    Invalid,
}

impl fmt::Display for Expectation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expectation::Placed {
                side,
                horizontal,
                vertical,
            } => write!(f, "placed {side} {horizontal} {vertical}"),
            Expectation::NoFit => write!(f, "none"),
            Expectation::Invalid => write!(f, "invalid"),
        }
    }
}

impl Expectation {
    fn matches(&self, outcome: &Result<PlacementResult, PlacementError>) -> bool {
        match (self, outcome) {
            (
                Expectation::Placed {
                    side,
                    horizontal,
                    vertical,
                },
                Ok(PlacementResult::Placed(p)),
            ) => {
                p.side == *side
                    && (p.offset.x - horizontal).abs() <= TOLERANCE
                    && (p.offset.y - vertical).abs() <= TOLERANCE
            }
            (Expectation::NoFit, Ok(PlacementResult::NoFit)) => true,
            (Expectation::Invalid, Err(_)) => true,
            _ => false,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Scenario {
    pub name: String,
    pub request: PlacementRequest,
    pub expectation: Option<Expectation>,
}

impl Scenario {
    /// Parse scenario text. `name` is only used in diagnostics.
    pub fn parse(name: impl Into<String>, source: &str) -> Result<Scenario, ScenarioError> {
        let ctx = SourceContext::new(name, source);
        let mut pairs = ScenarioParser::parse(Rule::scenario, source).map_err(|e| {
            let span: SourceSpan = match e.location {
                pest::error::InputLocation::Pos(pos) => (pos, 0).into(),
                pest::error::InputLocation::Span((start, end)) => (start, end - start).into(),
            };
            ScenarioError::Syntax {
                message: e.variant.message().into_owned(),
                src: ctx.named_source(),
                span,
            }
        })?;

        let root = pairs.next().ok_or_else(|| ScenarioError::Malformed {
            message: "empty parse tree".to_string(),
            src: ctx.named_source(),
            span: ctx.end_span(),
        })?;

        let mut slots = Slots::default();
        for stmt in root.into_inner() {
            slots.statement(stmt, &ctx)?;
        }
        slots.finish(ctx)
    }

    /// Read and parse a scenario file.
    pub fn load(path: impl AsRef<Path>) -> miette::Result<Scenario> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path)
            .into_diagnostic()
            .wrap_err_with(|| format!("reading {}", path.display()))?;
        Ok(Scenario::parse(path.display().to_string(), &source)?)
    }

    pub fn run(&self) -> Result<PlacementResult, PlacementError> {
        place(&self.request)
    }

    /// Run the scenario and compare against its expectation. Without an
    /// expectation only a refused request fails.
    pub fn check(&self) -> miette::Result<()> {
        let outcome = self.run();
        let Some(expected) = self.expectation else {
            outcome?;
            return Ok(());
        };
        if expected.matches(&outcome) {
            return Ok(());
        }
        let got = match &outcome {
            Ok(result) => result.to_string(),
            Err(err) => format!("invalid ({err})"),
        };
        Err(miette::miette!(
            "{}: expected {}, got {}",
            self.name,
            expected,
            got
        ))
    }
}

/// Statements seen so far, with where they were written.
#[derive(Default)]
struct Slots {
    anchor: Option<(Rect, SourceSpan)>,
    overlay: Option<((f64, f64, f64, f64), SourceSpan)>,
    viewport: Option<(Rect, SourceSpan)>,
    prefer: Option<(Vec<Side>, SourceSpan)>,
    margin: Option<(f64, SourceSpan)>,
    overflow: Option<(bool, SourceSpan)>,
    expect: Option<(Expectation, SourceSpan)>,
}

impl Slots {
    fn statement(&mut self, pair: Pair<Rule>, ctx: &SourceContext) -> Result<(), ScenarioError> {
        let span = span_of(&pair);
        match pair.as_rule() {
            Rule::anchor_stmt => {
                let [x, y, w, h] = numbers(pair, ctx)?;
                fill(&mut self.anchor, Rect::new(x, y, w, h), span, "anchor", ctx)
            }
            Rule::overlay_stmt => {
                let [x, y, w, h] = numbers(pair, ctx)?;
                fill(&mut self.overlay, (x, y, w, h), span, "overlay", ctx)
            }
            Rule::viewport_stmt => {
                let [x, y, w, h] = numbers(pair, ctx)?;
                fill(&mut self.viewport, Rect::new(x, y, w, h), span, "viewport", ctx)
            }
            Rule::prefer_stmt => {
                let sides = pair
                    .into_inner()
                    .filter(|p| p.as_rule() == Rule::side)
                    .map(|p| side(&p, ctx))
                    .collect::<Result<Vec<_>, _>>()?;
                fill(&mut self.prefer, sides, span, "prefer", ctx)
            }
            Rule::margin_stmt => {
                let [margin] = numbers(pair, ctx)?;
                fill(&mut self.margin, margin, span, "margin", ctx)
            }
            Rule::overflow_stmt => {
                let on = pair
                    .into_inner()
                    .any(|p| p.as_rule() == Rule::toggle && p.as_str() == "on");
                fill(&mut self.overflow, on, span, "overflow", ctx)
            }
            Rule::expect_stmt => {
                let expectation = expectation(pair, ctx)?;
                fill(&mut self.expect, expectation, span, "expect", ctx)
            }
            Rule::EOI => Ok(()),
            other => Err(malformed(format!("unexpected {other:?}"), span, ctx)),
        }
    }

    fn finish(self, ctx: SourceContext) -> Result<Scenario, ScenarioError> {
        let missing = |keyword| ScenarioError::Missing {
            keyword,
            src: ctx.named_source(),
            span: ctx.end_span(),
        };
        let (anchor, _) = self.anchor.ok_or_else(|| missing("anchor"))?;
        let ((ox, oy, max_w, max_h), _) = self.overlay.ok_or_else(|| missing("overlay"))?;
        let (viewport, _) = self.viewport.ok_or_else(|| missing("viewport"))?;
        let (sides, _) = self.prefer.ok_or_else(|| missing("prefer"))?;

        let mut options = PlacementOptions::default();
        if let Some((margin, _)) = self.margin {
            options = options.margin(margin);
        }
        if let Some((on, _)) = self.overflow {
            options = options.allow_overflow(on);
        }

        let request = PlacementRequest::new(anchor, dvec2(ox, oy), dvec2(max_w, max_h), viewport, sides)
            .with_options(options);

        Ok(Scenario {
            name: ctx.name,
            request,
            expectation: self.expect.map(|(e, _)| e),
        })
    }
}

fn fill<T>(
    slot: &mut Option<(T, SourceSpan)>,
    value: T,
    span: SourceSpan,
    keyword: &'static str,
    ctx: &SourceContext,
) -> Result<(), ScenarioError> {
    if let Some((_, first)) = slot {
        return Err(ScenarioError::Duplicate {
            keyword,
            src: ctx.named_source(),
            first: *first,
            again: span,
        });
    }
    *slot = Some((value, span));
    Ok(())
}

fn span_of(pair: &Pair<Rule>) -> SourceSpan {
    let span = pair.as_span();
    (span.start(), span.end() - span.start()).into()
}

fn malformed(message: String, span: SourceSpan, ctx: &SourceContext) -> ScenarioError {
    ScenarioError::Malformed {
        message,
        src: ctx.named_source(),
        span,
    }
}

fn number(pair: &Pair<Rule>, ctx: &SourceContext) -> Result<f64, ScenarioError> {
    let text = pair.as_str();
    text.parse::<f64>()
        .ok()
        .and_then(|value| check_finite(value).ok())
        .ok_or_else(|| ScenarioError::InvalidNumber {
            text: text.to_string(),
            src: ctx.named_source(),
            span: span_of(pair),
        })
}

/// Every number under `pair`, in order, which must be exactly `N` of them.
fn numbers<const N: usize>(pair: Pair<Rule>, ctx: &SourceContext) -> Result<[f64; N], ScenarioError> {
    let span = span_of(&pair);
    let values = pair
        .into_inner()
        .flatten()
        .filter(|p| p.as_rule() == Rule::number)
        .map(|p| number(&p, ctx))
        .collect::<Result<Vec<_>, _>>()?;
    let count = values.len();
    values
        .try_into()
        .map_err(|_| malformed(format!("expected {N} numbers, found {count}"), span, ctx))
}

fn side(pair: &Pair<Rule>, ctx: &SourceContext) -> Result<Side, ScenarioError> {
    pair.as_str()
        .parse::<Side>()
        .map_err(|e| malformed(e.to_string(), span_of(pair), ctx))
}

fn expectation(pair: Pair<Rule>, ctx: &SourceContext) -> Result<Expectation, ScenarioError> {
    let span = span_of(&pair);
    let inner = pair
        .into_inner()
        .find(|p| matches!(p.as_rule(), Rule::placed | Rule::no_fit | Rule::invalid))
        .ok_or_else(|| malformed("empty expectation".to_string(), span, ctx))?;
    match inner.as_rule() {
        Rule::no_fit => Ok(Expectation::NoFit),
        Rule::invalid => Ok(Expectation::Invalid),
        Rule::placed => {
            let inner_span = span_of(&inner);
            let mut parts = inner.into_inner().filter(|p| p.as_rule() != Rule::kw_placed);
            let side = match parts.next() {
                Some(p) => side(&p, ctx)?,
                None => return Err(malformed("missing side".to_string(), inner_span, ctx)),
            };
            let offsets = parts.map(|p| number(&p, ctx)).collect::<Result<Vec<_>, _>>()?;
            match offsets[..] {
                [horizontal, vertical] => Ok(Expectation::Placed {
                    side,
                    horizontal,
                    vertical,
                }),
                _ => Err(malformed("expected two offsets".to_string(), inner_span, ctx)),
            }
        }
        other => Err(malformed(format!("unexpected {other:?}"), span, ctx)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DROPDOWN: &str = r#"
# button with a dropdown below it
anchor 100 100 50 50
overlay 0 0 max 200 80
viewport 0 0 400 300
prefer bottom, right
margin 8
expect placed bottom 25 158
"#;

    #[test]
    fn parses_full_scenario() {
        let scenario = Scenario::parse("dropdown", DROPDOWN).unwrap();
        assert_eq!(scenario.name, "dropdown");
        assert_eq!(scenario.request.anchor, Rect::new(100.0, 100.0, 50.0, 50.0));
        assert_eq!(scenario.request.overlay_origin, dvec2(0.0, 0.0));
        assert_eq!(scenario.request.overlay_max_size, dvec2(200.0, 80.0));
        assert_eq!(scenario.request.viewport, Rect::new(0.0, 0.0, 400.0, 300.0));
        assert_eq!(scenario.request.sides, vec![Side::Bottom, Side::Right]);
        assert_eq!(scenario.request.options.margin, 8.0);
        assert!(!scenario.request.options.overflow_allowed);
        assert_eq!(
            scenario.expectation,
            Some(Expectation::Placed {
                side: Side::Bottom,
                horizontal: 25.0,
                vertical: 158.0
            })
        );
        assert!(scenario.check().is_ok());
    }

    #[test]
    fn optional_statements_use_defaults() {
        let source = "anchor 0 0 10 10\noverlay 0 0 max 5 5\nviewport 0 0 100 100\nprefer right";
        let scenario = Scenario::parse("<input>", source).unwrap();
        assert_eq!(scenario.request.options, PlacementOptions::default());
        assert_eq!(scenario.expectation, None);
        assert_eq!(scenario.run().unwrap().side(), Some(Side::Right));
    }

    #[test]
    fn statements_in_any_order_with_comments() {
        let source = "\
overflow on   # relax the cross axis
prefer top,left , bottom
viewport 0 0 400 300

anchor 10.5 -2 20 20
overlay 1 2 max 30 40
expect none
";
        let scenario = Scenario::parse("<input>", source).unwrap();
        assert!(scenario.request.options.overflow_allowed);
        assert_eq!(scenario.request.sides, vec![Side::Top, Side::Left, Side::Bottom]);
        assert_eq!(scenario.request.anchor.origin, dvec2(10.5, -2.0));
        assert_eq!(scenario.request.overlay_origin, dvec2(1.0, 2.0));
        assert_eq!(scenario.expectation, Some(Expectation::NoFit));
    }

    #[test]
    fn syntax_errors_point_into_source() {
        let syntax_offset = |source: &str| match Scenario::parse("<input>", source).unwrap_err() {
            ScenarioError::Syntax { span, .. } => span.offset(),
            other => panic!("expected a syntax error, got {other:?}"),
        };
        // The fourth number is missing where the line ends.
        assert_eq!(syntax_offset("anchor 1 2 3\n"), 12);
        assert_eq!(syntax_offset("prefer sideways\n"), 7);
    }

    #[test]
    fn keywords_need_a_word_boundary() {
        let rest = "overlay 0 0 max 200 80\nviewport 0 0 400 300\nprefer bottom\n";
        let err = Scenario::parse("<input>", &format!("anchor100 100 50 50\n{rest}")).unwrap_err();
        assert_eq!(err.kind(), "syntax");

        let glued = [
            "anchor 100 100 50 50\noverlay 0 0 max200 80\nviewport 0 0 400 300\nprefer bottom\n",
            "anchor 100 100 50 50\noverlay 0 0 max 200 80\nviewport 0 0 400 300\nprefer bottomright\n",
            "anchor 100 100 50 50\noverlay 0 0 max 200 80\nviewport 0 0 400 300\nprefer bottom\noverflow onward\n",
            "anchor 100 100 50 50\noverlay 0 0 max 200 80\nviewport 0 0 400 300\nprefer bottom\nexpect placedbottom 25 158\n",
        ];
        for source in glued {
            let err = Scenario::parse("<input>", source).unwrap_err();
            assert_eq!(err.kind(), "syntax", "{source}");
        }
    }

    #[test]
    fn duplicate_statement_is_reported() {
        let source = "anchor 0 0 1 1\nanchor 0 0 2 2\n";
        let err = Scenario::parse("<input>", source).unwrap_err();
        assert_eq!(err.kind(), "duplicate");
        match err {
            ScenarioError::Duplicate { keyword, first, again, .. } => {
                assert_eq!(keyword, "anchor");
                assert_eq!(first.offset(), 0);
                assert_eq!(again.offset(), 15);
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn missing_statement_is_reported() {
        let source = "anchor 0 0 1 1\noverlay 0 0 max 1 1\nprefer top\n";
        let err = Scenario::parse("<input>", source).unwrap_err();
        assert!(matches!(err, ScenarioError::Missing { keyword: "viewport", .. }));
    }

    #[test]
    fn overflowing_number_is_invalid() {
        let huge = "9".repeat(400);
        let source = format!("anchor {huge} 0 1 1\noverlay 0 0 max 1 1\nviewport 0 0 1 1\nprefer top\n");
        let err = Scenario::parse("<input>", &source).unwrap_err();
        assert_eq!(err.kind(), "invalid_number");
    }

    #[test]
    fn check_reports_mismatch() {
        let source = DROPDOWN.replace("expect placed bottom 25 158", "expect placed right 0 0");
        let scenario = Scenario::parse("wrong", &source).unwrap();
        let report = scenario.check().unwrap_err();
        assert_eq!(
            report.to_string(),
            "wrong: expected placed right 0 0, got placed bottom 25 158"
        );
    }

    #[test]
    fn invalid_expectation_accepts_refusal() {
        let source = "anchor 0 0 10 10\noverlay 0 0 max 0 5\nviewport 0 0 100 100\nprefer right\nexpect invalid\n";
        let scenario = Scenario::parse("<input>", source).unwrap();
        assert!(scenario.run().is_err());
        assert!(scenario.check().is_ok());
    }
}
