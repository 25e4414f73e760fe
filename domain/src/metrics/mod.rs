//! Marketing KPI rows as returned by the metrics summary endpoint.

pub mod kpi;
