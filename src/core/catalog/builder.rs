//! Catalog build pass
//!
//! Turns [`CatalogDefinition`]s into an immutable [`RuleCatalog`]. This is
//! the only place regexes are compiled and the only place compiled rules
//! are checked; once `build` returns, evaluation trusts what it gets.

use std::collections::{BTreeMap, HashMap, HashSet};

use log::debug;
use regex::{Regex, RegexBuilder};
use sha2::{Digest, Sha256};

use super::RuleCatalog;
use super::definition::{CatalogDefinition, ClauseDefinition, RuleDefinition, TestDefinition, TestOp};
use crate::core::error::CatalogError;
use crate::core::models::Classification;
use crate::core::rules::{
    Clause, CompiledPattern, Guard, MalformedPlaceholder, Predicate, Rule, Template, Test,
};

/// Highest capture slot a test may bind
pub const MAX_SLOT: usize = 63;

/// Bounds on regex complexity enforced at build time
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegexLimits {
    /// Compiled program size limit, in bytes
    pub size_limit: usize,
    /// Longest accepted pattern source, in bytes
    pub max_pattern_len: usize,
}

impl RegexLimits {
    /// Default compiled size limit (1 MiB)
    pub const DEFAULT_SIZE_LIMIT: usize = 1 << 20;
    /// Default pattern length limit
    pub const DEFAULT_MAX_PATTERN_LEN: usize = 4096;
}

impl Default for RegexLimits {
    fn default() -> Self {
        Self {
            size_limit: Self::DEFAULT_SIZE_LIMIT,
            max_pattern_len: Self::DEFAULT_MAX_PATTERN_LEN,
        }
    }
}

/// Stable subclass fingerprint of a clause
///
/// First 31 bits of SHA-256 over the rule id and the canonical clause text.
#[must_use]
pub fn fingerprint(rule_id: &str, clause_text: &str) -> u32 {
    let mut hasher = Sha256::new();
    hasher.update(rule_id.as_bytes());
    hasher.update(b"\n");
    hasher.update(clause_text.as_bytes());
    let digest = hasher.finalize();
    let head = [digest[0], digest[1], digest[2], digest[3]];
    u32::from_be_bytes(head) >> 1
}

/// Collects definitions and compiles them into a [`RuleCatalog`]
#[derive(Debug, Default)]
pub struct CatalogBuilder {
    limits: RegexLimits,
    classes: Vec<Classification>,
    rules: Vec<RuleDefinition>,
}

impl CatalogBuilder {
    /// Empty builder with default regex limits
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the regex limits
    #[must_use]
    pub const fn with_limits(mut self, limits: RegexLimits) -> Self {
        self.limits = limits;
        self
    }

    /// Register a class
    #[must_use]
    pub fn class(mut self, class: Classification) -> Self {
        self.classes.push(class);
        self
    }

    /// Append a rule
    #[must_use]
    pub fn rule(mut self, rule: RuleDefinition) -> Self {
        self.rules.push(rule);
        self
    }

    /// Append every class and rule of a parsed catalog file
    #[must_use]
    pub fn definition(mut self, definition: CatalogDefinition) -> Self {
        self.classes.extend(definition.classes);
        self.rules.extend(definition.rules);
        self
    }

    /// Validate and compile everything collected so far
    pub fn build(self) -> Result<RuleCatalog, CatalogError> {
        let mut classes = BTreeMap::new();
        for class in self.classes {
            let id = class.id;
            if classes.insert(id, class).is_some() {
                return Err(CatalogError::DuplicateClass(id));
            }
        }

        let mut compiler = Compiler {
            limits: self.limits,
            regex_cache: HashMap::new(),
        };
        let mut seen = HashSet::new();
        let mut rules = Vec::with_capacity(self.rules.len());

        for definition in self.rules {
            if !seen.insert(definition.id.clone()) {
                return Err(CatalogError::DuplicateRule(definition.id));
            }
            if !classes.contains_key(&definition.class) {
                return Err(CatalogError::UnknownClass {
                    rule: definition.id,
                    class: definition.class,
                });
            }
            rules.push(compiler.compile_rule(definition)?);
        }

        let catalog = RuleCatalog::from_parts(rules, classes);
        debug!(
            "Built rule catalog: {} rules, {} clauses, {} classes, {} distinct patterns",
            catalog.len(),
            catalog.clause_count(),
            catalog.classes().count(),
            compiler.regex_cache.len()
        );
        Ok(catalog)
    }
}

/// Per-build state
struct Compiler {
    limits: RegexLimits,
    /// Identical pattern sources compile once; `Regex` clones share the program
    regex_cache: HashMap<String, Regex>,
}

impl Compiler {
    fn compile_rule(&mut self, definition: RuleDefinition) -> Result<Rule, CatalogError> {
        let RuleDefinition {
            id,
            class,
            subclass,
            kinds,
            message,
            guard,
            clauses: clause_definitions,
        } = definition;

        if clause_definitions.is_empty() {
            return Err(CatalogError::EmptyRule(id));
        }

        let template = match Template::parse(&message) {
            Ok(template) => template,
            Err(MalformedPlaceholder(text)) => {
                return Err(CatalogError::MalformedPlaceholder { rule: id, text });
            },
        };
        let template_slots = template.slots();

        let mut clauses = Vec::with_capacity(clause_definitions.len());
        for (index, clause_definition) in clause_definitions.into_iter().enumerate() {
            let clause = self.compile_clause(&id, index, subclass, clause_definition)?;
            let bound = clause.bound_slots();
            if let Some(&slot) = template_slots.iter().find(|&&s| !bound.contains(&s)) {
                return Err(CatalogError::UnboundPlaceholder {
                    rule: id,
                    clause: index,
                    slot,
                });
            }
            clauses.push(clause);
        }

        let guard = match guard {
            Some(conjuncts) => {
                let guard = Guard::new(conjuncts);
                if let Some(index) = clauses.iter().position(|c| !guard.covers(c)) {
                    return Err(CatalogError::UnsoundGuard {
                        rule: id,
                        clause: index,
                    });
                }
                guard
            },
            None => Guard::derive(&clauses),
        };

        Ok(Rule::new(id, class, kinds, guard, clauses, template))
    }

    fn compile_clause(
        &mut self,
        rule: &str,
        index: usize,
        rule_subclass: Option<u32>,
        definition: ClauseDefinition,
    ) -> Result<Clause, CatalogError> {
        if definition.tests.is_empty() {
            return Err(CatalogError::EmptyClause {
                rule: rule.to_string(),
                clause: index,
            });
        }

        let tests = definition
            .tests
            .into_iter()
            .map(|t| self.compile_test(rule, index, t))
            .collect::<Result<Vec<_>, _>>()?;

        let subclass = match definition.subclass.or(rule_subclass) {
            Some(subclass) => subclass,
            None => {
                let text: String = tests.iter().map(ToString::to_string).collect();
                fingerprint(rule, &text)
            },
        };

        let clause = Clause::new(tests, subclass);
        Ok(match definition.selector {
            Some(selector) => clause.with_selector(selector),
            None => clause,
        })
    }

    fn compile_test(
        &mut self,
        rule: &str,
        clause: usize,
        definition: TestDefinition,
    ) -> Result<Test, CatalogError> {
        let TestDefinition {
            key,
            op,
            value,
            slot,
        } = definition;

        if let Some(slot) = slot.filter(|&s| s > MAX_SLOT) {
            return Err(CatalogError::InvalidSlot {
                rule: rule.to_string(),
                clause,
                slot,
                max: MAX_SLOT,
            });
        }

        let predicate = match (op, value) {
            (TestOp::Present, None) => Predicate::Present,
            (TestOp::Absent, None) => Predicate::Absent,
            (TestOp::Present | TestOp::Absent, Some(_)) => {
                return Err(CatalogError::UnexpectedValue {
                    rule: rule.to_string(),
                    clause,
                    op: op.to_string(),
                    key,
                });
            },
            (_, None) => {
                return Err(CatalogError::MissingValue {
                    rule: rule.to_string(),
                    clause,
                    op: op.to_string(),
                    key,
                });
            },
            (TestOp::Eq, Some(v)) => Predicate::Equals(v),
            (TestOp::Ne, Some(v)) => Predicate::NotEquals(v),
            (TestOp::Contains, Some(v)) => Predicate::Contains(v),
            (TestOp::Regex, Some(v)) => Predicate::Matches(self.compile_pattern(rule, v)?),
            (TestOp::NotRegex, Some(v)) => Predicate::NotMatches(self.compile_pattern(rule, v)?),
        };

        let test = Test::new(key, predicate);
        Ok(match slot {
            Some(slot) => test.with_slot(slot),
            None => test,
        })
    }

    fn compile_pattern(&mut self, rule: &str, source: String) -> Result<CompiledPattern, CatalogError> {
        if source.len() > self.limits.max_pattern_len {
            return Err(CatalogError::PatternTooLong {
                rule: rule.to_string(),
                len: source.len(),
                limit: self.limits.max_pattern_len,
            });
        }

        if let Some(regex) = self.regex_cache.get(&source) {
            return Ok(CompiledPattern::new(source, regex.clone()));
        }

        let regex = RegexBuilder::new(&source)
            .size_limit(self.limits.size_limit)
            .build()
            .map_err(|e| CatalogError::InvalidRegex {
                rule: rule.to_string(),
                pattern: source.clone(),
                source: e,
            })?;
        self.regex_cache.insert(source.clone(), regex.clone());
        Ok(CompiledPattern::new(source, regex))
    }
}
