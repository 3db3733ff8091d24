use crate::decision::{Decision, DecisionEngine, ViolationReason};
use crate::fingerprint::fingerprint_for_call;
use crate::model::{AnalysisModel, CallKind, CallSite, Symbol};
use crate::policy::FailOn;
use crate::report::{DomainReport, SeverityCounts};
use rayon::prelude::*;
use resultguard_types::{Finding, ResultguardData, Severity, Verdict, ids};
use serde_json::json;

/// Run the decision policy over every call site in the model and build a report.
///
/// Call sites are decided in parallel; the engine is read-only so no locking is involved.
pub fn evaluate(model: &AnalysisModel, engine: &DecisionEngine) -> DomainReport {
    let cfg = engine.config();
    let sites: Vec<&CallSite> = model.call_sites().collect();

    let decisions: Vec<Decision> = sites.par_iter().map(|site| engine.decide(site)).collect();

    let not_applicable = decisions
        .iter()
        .filter(|d| matches!(d, Decision::NotApplicable(_)))
        .count() as u32;

    let mut findings: Vec<Finding> = sites
        .iter()
        .zip(decisions)
        .filter_map(|(site, decision)| match (decision, site.target.as_ref()) {
            (Decision::Violation(reason), Some(target)) => {
                Some(build_finding(site, target, &reason, cfg.severity))
            }
            _ => None,
        })
        .collect();

    // Deterministic ordering before truncation.
    findings.sort_by(compare_findings);

    let total = findings.len() as u32;

    let mut emitted = findings;
    let mut truncated_reason: Option<String> = None;
    if emitted.len() > cfg.max_findings {
        emitted.truncate(cfg.max_findings);
        truncated_reason = Some(format!(
            "findings truncated to max_findings={}",
            cfg.max_findings
        ));
    }

    let verdict = compute_verdict(&emitted, cfg.fail_on);
    let counts = SeverityCounts::from_findings(&emitted);

    let data = ResultguardData {
        profile: cfg.profile.clone(),
        files_scanned: model.files.len() as u32,
        call_sites_scanned: sites.len() as u32,
        not_applicable,
        findings_total: total,
        findings_emitted: emitted.len() as u32,
        truncated_reason,
    };

    DomainReport {
        verdict,
        findings: emitted,
        data,
        counts,
    }
}

/// `Result of 'String.trim()' is ignored`, or `'String::trim'` for method references.
pub fn violation_message(site: &CallSite, target: &Symbol) -> String {
    let class = target
        .declaring_class
        .as_ref()
        .map(|c| c.simple_name.as_str())
        .unwrap_or("?");
    match site.kind {
        CallKind::MethodCall => format!("Result of '{}.{}()' is ignored", class, target.name),
        CallKind::MethodReference => format!("Result of '{}::{}' is ignored", class, target.name),
    }
}

fn build_finding(
    site: &CallSite,
    target: &Symbol,
    reason: &ViolationReason,
    severity: Severity,
) -> Finding {
    let location = site.highlight().clone();
    let method = target.qualified_name();
    let fingerprint = fingerprint_for_call(
        ids::CHECK_CALLS_RESULT_IGNORED,
        reason.code(),
        location.path.as_str(),
        &method,
        location.line,
        location.col,
    );

    Finding {
        severity,
        check_id: ids::CHECK_CALLS_RESULT_IGNORED.to_string(),
        code: reason.code().to_string(),
        message: violation_message(site, target),
        location: Some(location),
        help: Some(help_for(reason)),
        url: None,
        fingerprint: Some(fingerprint),
        data: finding_data(site, &method, reason),
    }
}

fn help_for(reason: &ViolationReason) -> String {
    match reason {
        ViolationReason::SimpleGetter => {
            "The method only returns a field; remove the call or use its value.".to_string()
        }
        ViolationReason::NonLibraryCall => {
            "All project method results must be used (report_all_non_library_calls).".to_string()
        }
        ViolationReason::PureMethod { .. } => {
            "The method is declared pure; the call has no effect unless its value is used."
                .to_string()
        }
        ViolationReason::MustCheckAnnotation { annotation, owner, .. } => format!(
            "@{} on {} requires the value to be used; annotate the method with @CanIgnoreReturnValue if ignoring it is intended.",
            simple_annotation_name(annotation),
            owner
        ),
        ViolationReason::MustUsePattern { class_name, methods } => format!(
            "{class_name} methods matching '{methods}' have no side effects; use the returned value."
        ),
    }
}

fn simple_annotation_name(name: &str) -> &str {
    name.rsplit('.').next().unwrap_or(name)
}

fn finding_data(site: &CallSite, method: &str, reason: &ViolationReason) -> serde_json::Value {
    let mut data = json!({
        "method": method,
        "call_kind": site.kind,
        "discard": site.discard,
    });
    let extra = match reason {
        ViolationReason::SimpleGetter | ViolationReason::NonLibraryCall => json!({}),
        ViolationReason::PureMethod { origin } => json!({ "contract": origin }),
        ViolationReason::MustCheckAnnotation {
            annotation,
            owner_kind,
            owner,
        } => json!({
            "annotation": annotation,
            "owner_kind": owner_kind,
            "owner": owner,
        }),
        ViolationReason::MustUsePattern { class_name, methods } => json!({
            "pattern": { "class": class_name, "methods": methods },
        }),
    };
    if let (Some(obj), Some(extra)) = (data.as_object_mut(), extra.as_object()) {
        obj.extend(extra.clone());
    }
    data
}

fn compute_verdict(findings: &[Finding], fail_on: FailOn) -> Verdict {
    let has_error = findings.iter().any(|f| f.severity == Severity::Error);
    if has_error {
        return Verdict::Fail;
    }

    let has_warn = findings.iter().any(|f| f.severity == Severity::Warning);
    if has_warn {
        return match fail_on {
            FailOn::Warning => Verdict::Fail,
            FailOn::Error => Verdict::Warn,
        };
    }

    Verdict::Pass
}

fn compare_findings(a: &Finding, b: &Finding) -> std::cmp::Ordering {
    // Ordering priority:
    // 1) severity (error -> warning -> info)
    // 2) location.path, line, col (missing last)
    // 3) code
    // 4) message
    let severity_rank = |sev: Severity| match sev {
        Severity::Error => 0,
        Severity::Warning => 1,
        Severity::Info => 2,
    };
    let key = |f: &Finding| match &f.location {
        Some(l) => (
            l.path.as_str().to_string(),
            l.line.unwrap_or(u32::MAX),
            l.col.unwrap_or(u32::MAX),
        ),
        None => ("~".to_string(), u32::MAX, u32::MAX),
    };

    severity_rank(a.severity)
        .cmp(&severity_rank(b.severity))
        .then_with(|| key(a).cmp(&key(b)))
        .then_with(|| a.code.cmp(&b.code))
        .then_with(|| a.message.cmp(&b.message))
}
