//! Self-contained HTML report: the summary list followed by one details
//! section per function.

use std::path::Path;

use serde::Serialize;
use tracing::info;

use crate::common::handlebars::get_handlebars;
use crate::common::write_string_to_file;
use crate::errors::ExportResult;
use crate::link::DeepLink;
use crate::summary::AnalysisSnapshot;

const REPORT_TEMPLATE: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>SonerCore: {{repo_url}}</title>
<style>
body { font-family: system-ui, sans-serif; background: #0f172a; color: #e2e8f0; max-width: 1200px; margin: 0 auto; padding: 2rem; }
.card { background: #1e293b; border: 1px solid #334155; border-radius: 8px; padding: 1rem; margin-bottom: 1rem; }
.file-header { display: flex; justify-content: space-between; border-bottom: 1px solid #334155; padding-bottom: 0.5rem; margin-bottom: 1rem; }
.function-item { display: flex; justify-content: space-between; background: rgba(0,0,0,0.2); padding: 0.5rem; border-radius: 4px; margin-bottom: 0.5rem; color: inherit; text-decoration: none; }
.muted { color: #94a3b8; }
.empty { color: #64748b; font-style: italic; }
.complexity-low { color: #22c55e; }
.complexity-medium { color: #eab308; }
.complexity-high { color: #ef4444; }
.cost { font-weight: bold; color: #ef4444; }
pre { background: #0f172a; padding: 1rem; border-radius: 8px; overflow-x: auto; }
</style>
</head>
<body>
<h1 id="summary">SonerCore</h1>
<p class="muted">Cognitive Load Analysis for {{repo_url}}</p>
{{#if files}}
<div class="file-list">
{{#each files}}
<div class="card">
<div class="file-header"><strong>{{path}}</strong><span class="{{tier_class complexity}}">Total Complexity: {{complexity}}</span></div>
{{#if functions}}
{{#each functions}}
<a class="function-item" href="#{{anchor}}"><span>func {{name}}</span><span class="{{tier_class score}}">{{score}}</span></a>
{{#if contributor_count}}<div class="muted">{{contributor_count}} complexity contributors</div>{{/if}}
{{/each}}
{{else}}
<div class="empty">No functions analyzed</div>
{{/if}}
</div>
{{/each}}
</div>
{{else}}
<div class="card">No files found or analyzed.</div>
{{/if}}
{{#each sections}}
<section class="card" id="{{anchor}}">
<h2>func {{name}}</h2>
<p class="muted">{{path}}</p>
<div class="{{tier_class score}}">Score: {{score}}</div>
<a href="{{link.href}}" target="{{link.target}}" rel="{{link.rel}}">View on GitHub &rarr;</a>
<h3>Source Code</h3>
<pre><code>{{source}}</code></pre>
<h3>Complexity Details</h3>
{{#each contributors}}
<div class="card"><div class="cost">+{{cost}}</div><div>{{message}}</div><div class="muted">Line {{line}}</div></div>
{{/each}}
<a href="#summary">&larr; Back to Results</a>
</section>
{{/each}}
</body>
</html>
"##;

#[derive(Serialize)]
struct ReportData<'a> {
    repo_url: &'a str,
    files: Vec<ReportFile<'a>>,
    sections: Vec<ReportFunction<'a>>,
}

#[derive(Serialize)]
struct ReportFile<'a> {
    path: &'a str,
    complexity: i64,
    functions: Vec<ReportFunction<'a>>,
}

#[derive(Serialize, Clone)]
struct ReportFunction<'a> {
    anchor: String,
    name: &'a str,
    path: &'a str,
    score: i64,
    source: &'a str,
    contributor_count: usize,
    contributors: Vec<ReportContributor<'a>>,
    link: DeepLink,
}

#[derive(Serialize, Clone)]
struct ReportContributor<'a> {
    line: i64,
    message: &'a str,
    cost: i64,
}

fn report_data(snapshot: &AnalysisSnapshot) -> ReportData<'_> {
    let mut sections = Vec::new();
    let files = snapshot
        .files()
        .iter()
        .enumerate()
        .map(|(file_idx, file)| {
            let functions: Vec<ReportFunction<'_>> = file
                .functions
                .iter()
                .enumerate()
                .map(|(fn_idx, function)| ReportFunction {
                    anchor: format!("fn-{}-{}", file_idx + 1, fn_idx + 1),
                    name: &function.name,
                    path: &file.path,
                    score: function.score,
                    source: &function.source,
                    contributor_count: function.details.len(),
                    contributors: function
                        .details
                        .iter()
                        .map(|d| ReportContributor {
                            line: d.line,
                            message: &d.message,
                            cost: d.cost,
                        })
                        .collect(),
                    link: DeepLink::new(
                        &snapshot.repo_url,
                        &file.path,
                        function.start_line,
                        function.end_line,
                    ),
                })
                .collect();
            sections.extend(functions.iter().cloned());
            ReportFile {
                path: &file.path,
                complexity: file.complexity,
                functions,
            }
        })
        .collect();

    ReportData {
        repo_url: &snapshot.repo_url,
        files,
        sections,
    }
}

/// Render the snapshot as one HTML page.
pub fn render_report(snapshot: &AnalysisSnapshot) -> ExportResult<String> {
    let handlebars = get_handlebars();
    let data = serde_json::to_value(report_data(snapshot))?;
    Ok(handlebars.render_template(REPORT_TEMPLATE, &data)?)
}

/// Render and write the report to `path`, creating parent directories.
pub fn write_report(snapshot: &AnalysisSnapshot, path: &Path) -> ExportResult<()> {
    let html = render_report(snapshot)?;
    write_string_to_file(path, &html)?;
    info!("Wrote report for {} files to {}", snapshot.files().len(), path.display());
    Ok(())
}
