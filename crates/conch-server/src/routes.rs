use crate::chart::{self, ChartError};
use crate::AppState;
use askama::Template;
use axum::extract::{Path, State};
use axum::http::{header, StatusCode};
use axum::response::{Html, IntoResponse, Response};
use axum::Json;
use conch_report::hms::format_hms;
use conch_report::{labels, DatacenterReport, TypeReport};
use serde::Serialize;
use std::collections::BTreeMap;

const STYLE_CSS: &str = include_str!("style.css");

type HandlerError = (StatusCode, String);

/// Count/mean/median triple as served by every JSON route.
#[derive(Debug, Serialize)]
pub struct TypeSummary {
    pub count: i64,
    pub mean: String,
    pub median: String,
    pub mean_ns: i64,
    pub median_ns: i64,
}

impl From<&TypeReport> for TypeSummary {
    fn from(times: &TypeReport) -> Self {
        Self {
            count: times.count,
            mean: format_hms(times.mean),
            median: format_hms(times.median),
            mean_ns: times.mean,
            median_ns: times.median,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ComponentBreakdown {
    pub summary: TypeSummary,
    pub components: BTreeMap<String, TypeSummary>,
}

#[derive(Debug, Serialize)]
pub struct SubtypeDetail {
    pub display_name: String,
    pub summary: TypeSummary,
    pub devices: Vec<DeviceRow>,
}

#[derive(Debug, Serialize)]
pub struct DeviceRow {
    pub device_id: String,
    pub component_name: String,
    pub remediation: String,
    pub remediation_ns: i64,
}

#[derive(Template)]
#[template(path = "index.html")]
struct IndexTemplate {
    datacenters: Vec<DcSection>,
}

struct DcSection {
    name: String,
    failure_count: i64,
    rows: Vec<DcRow>,
}

struct DcRow {
    failure_type: String,
    count: i64,
    mean: String,
    median: String,
}

fn not_found(what: &str, key: &str) -> HandlerError {
    (StatusCode::NOT_FOUND, format!("no such {}: {}", what, key))
}

fn lookup_dc<'a>(state: &'a AppState, az: &str) -> Result<&'a DatacenterReport, HandlerError> {
    state
        .report
        .processed
        .get(az)
        .ok_or_else(|| not_found("datacenter", az))
}

pub async fn index(State(state): State<AppState>) -> Result<Html<String>, HandlerError> {
    let datacenters = state
        .report
        .processed
        .values()
        .map(|dc| DcSection {
            name: dc.name.clone(),
            failure_count: dc.times_by_type.values().map(|t| t.count).sum(),
            rows: dc
                .times_by_type
                .iter()
                .map(|(failure_type, times)| DcRow {
                    failure_type: failure_type.clone(),
                    count: times.count,
                    mean: format_hms(times.mean),
                    median: format_hms(times.median),
                })
                .collect(),
        })
        .collect();

    let page = IndexTemplate { datacenters };
    page.render().map(Html).map_err(|e| {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("template rendering failed: {}", e),
        )
    })
}

pub async fn full_text(State(state): State<AppState>) -> Response {
    (
        [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
        state.report.as_text(true, true, true),
    )
        .into_response()
}

pub async fn full_csv(State(state): State<AppState>) -> Result<Response, HandlerError> {
    let csv = state.report.as_csv().map_err(|e| {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("CSV rendering failed: {}", e),
        )
    })?;
    Ok(([(header::CONTENT_TYPE, "text/csv")], csv).into_response())
}

pub async fn style() -> Response {
    ([(header::CONTENT_TYPE, "text/css")], STYLE_CSS).into_response()
}

pub async fn times_by_az(
    State(state): State<AppState>,
    Path(az): Path<String>,
) -> Result<Json<BTreeMap<String, TypeSummary>>, HandlerError> {
    let dc = lookup_dc(&state, &az)?;
    let summaries = dc
        .times_by_type
        .iter()
        .map(|(failure_type, times)| (failure_type.clone(), TypeSummary::from(times)))
        .collect();
    Ok(Json(summaries))
}

pub async fn times_by_component(
    State(state): State<AppState>,
    Path((az, component)): Path<(String, String)>,
) -> Result<Json<ComponentBreakdown>, HandlerError> {
    let dc = lookup_dc(&state, &az)?;
    let times = dc
        .times_by_type
        .get(&component)
        .ok_or_else(|| not_found("component type", &component))?;

    let components = dc
        .times_by_subtype
        .get(&component)
        .map(|subtypes| {
            subtypes
                .iter()
                .map(|(name, sub_times)| {
                    (
                        labels::display_name(&component, name).to_string(),
                        TypeSummary::from(sub_times),
                    )
                })
                .collect()
        })
        .unwrap_or_default();

    Ok(Json(ComponentBreakdown {
        summary: TypeSummary::from(times),
        components,
    }))
}

pub async fn times_by_subtype(
    State(state): State<AppState>,
    Path((az, component, subtype)): Path<(String, String, String)>,
) -> Result<Json<SubtypeDetail>, HandlerError> {
    let dc = lookup_dc(&state, &az)?;
    let times = dc
        .times_by_subtype
        .get(&component)
        .and_then(|subtypes| subtypes.get(&subtype))
        .ok_or_else(|| not_found("component", &subtype))?;

    let devices = times
        .devices
        .iter()
        .map(|d| DeviceRow {
            device_id: d.device_id.clone(),
            component_name: d.component_name.clone(),
            remediation: format_hms(d.remediation_ns),
            remediation_ns: d.remediation_ns,
        })
        .collect();

    Ok(Json(SubtypeDetail {
        display_name: labels::display_name(&component, &subtype).to_string(),
        summary: TypeSummary::from(times),
        devices,
    }))
}

pub async fn graph_by_type(
    State(state): State<AppState>,
    Path(az): Path<String>,
) -> Result<Response, HandlerError> {
    let dc = lookup_dc(&state, &az)?;
    let values: Vec<f64> = dc
        .times_by_type
        .values()
        .map(|times| times.mean as f64 / 3.6e12)
        .collect();
    png_response(&values)
}

pub async fn graph_by_vendor(
    State(state): State<AppState>,
    Path(az): Path<String>,
) -> Result<Response, HandlerError> {
    let dc = lookup_dc(&state, &az)?;
    // Mean over every sample recorded for the vendor, across types.
    let values: Vec<f64> = dc
        .times_by_vendor_and_type
        .values()
        .map(|types| {
            let samples: Vec<i64> = types.values().flat_map(|t| t.all.iter().copied()).collect();
            conch_report::stats::mean(&samples) as f64 / 3.6e12
        })
        .collect();
    png_response(&values)
}

fn png_response(values: &[f64]) -> Result<Response, HandlerError> {
    match chart::bar_chart_png(values) {
        Ok(png) => Ok(([(header::CONTENT_TYPE, "image/png")], png).into_response()),
        Err(e @ ChartError::Empty) => Err((StatusCode::INTERNAL_SERVER_ERROR, e.to_string())),
        Err(e) => Err((
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("chart rendering failed: {}", e),
        )),
    }
}
