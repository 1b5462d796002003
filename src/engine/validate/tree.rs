//! Rule tree walk.
//!
//! A node carrying any combinator key (`if`, `then`, `and`, `or`) is a
//! combinator node: every combinator key present is type-checked and
//! descended into, and leaf fields on the same node are ignored. Any
//! other node is a leaf and is checked against the rule field table.
//!
//! The walk keeps its own stack instead of recursing, so nesting depth
//! is bounded by [`ValidationLimits::max_depth`] rather than by the call
//! stack. Violations come out in the same order a depth-first recursive
//! walk would produce them.
//!
//! [`ValidationLimits::max_depth`]: crate::domain::config::ValidationLimits

use serde_json::Value;

use super::field::{check_type, validate_fields};
use super::{Scope, SchemaViolation, schema};

enum Step<'v> {
    Visit { node: &'v Value, depth: usize },
    Report(SchemaViolation),
}

/// Validates the rule tree rooted at `root`.
pub fn validate_rule(scope: Scope<'_>, root: &Value) -> Vec<SchemaViolation> {
    let mut violations = Vec::new();
    let mut depth_reported = false;
    let mut stack = vec![Step::Visit {
        node: root,
        depth: 0,
    }];

    while let Some(step) = stack.pop() {
        let (node, depth) = match step {
            Step::Report(violation) => {
                violations.push(violation);
                continue;
            }
            Step::Visit { node, depth } => (node, depth),
        };

        if depth > scope.limits.max_depth {
            if !depth_reported {
                depth_reported = true;
                violations.push(SchemaViolation::TooDeep {
                    label: scope.label.to_string(),
                    max_depth: scope.limits.max_depth,
                });
            }
            continue;
        }

        let fields = node.as_object();
        let mut combinator_found = false;
        let mut pending = Vec::new();
        for (name, spec) in schema::COMBINATOR_FIELDS {
            let Some(value) = fields.and_then(|fields| fields.get(*name)) else {
                continue;
            };
            combinator_found = true;

            if let Some(mismatch) = check_type(scope, name, spec, value) {
                pending.push(Step::Report(mismatch));
                continue;
            }
            match value {
                Value::Array(children) => {
                    pending.extend(children.iter().map(|child| Step::Visit {
                        node: child,
                        depth: depth + 1,
                    }));
                }
                child => pending.push(Step::Visit {
                    node: child,
                    depth: depth + 1,
                }),
            }
        }

        if combinator_found {
            stack.extend(pending.into_iter().rev());
        } else {
            violations.extend(validate_fields(scope, schema::RULE_FIELDS, fields));
        }
    }

    violations
}
