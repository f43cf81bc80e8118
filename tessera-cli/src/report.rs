//! JSON-serializable results of the command line subcommands.

use anyhow::{Context, Result};
use log::debug;
use serde::Serialize;
use tessera_bins::{BinError, BinGenerator, ThresholdStrategy};
use tessera_common::{Accessor, Dimensions, FieldAccessor, Record};
use tessera_geometry::{ClipBounds, Voronoi};
use tessera_scales::array::extent;
use tessera_scales::LinearScale;

#[derive(Debug, Clone, Default)]
pub struct HistogramOptions {
    pub thresholds: Option<usize>,
    pub strategy: ThresholdStrategy,
    pub domain: Option<(f64, f64)>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BinReport {
    pub x0: f64,
    pub x1: f64,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HistogramReport {
    pub field: String,
    pub domain: (f64, f64),
    pub bins: Vec<BinReport>,
    pub max_count: usize,
    pub mean: Option<f64>,
    pub dropped: usize,
}

impl HistogramReport {
    pub fn build(
        records: &[Record],
        field: &str,
        options: &HistogramOptions,
    ) -> Result<Self, BinError> {
        let accessor = FieldAccessor::new(field);

        let mut generator = BinGenerator::new().strategy(options.strategy);
        if let Some(count) = options.thresholds {
            generator = generator.thresholds(count);
        }
        if let Some(domain) = options.domain {
            generator = generator.domain(domain);
        }

        let histogram = generator.bin(records, &accessor)?;
        Ok(Self {
            field: field.to_string(),
            domain: histogram.domain,
            bins: histogram
                .iter()
                .map(|bin| BinReport {
                    x0: bin.x0,
                    x1: bin.x1,
                    count: bin.len(),
                })
                .collect(),
            max_count: histogram.max_count(),
            mean: histogram.mean(records, &accessor)?,
            dropped: histogram.dropped,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CellReport {
    /// Position of the record in the loaded dataset
    pub index: usize,
    pub site: [f64; 2],
    pub polygon: Vec<[f64; 2]>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VoronoiReport {
    pub width: f64,
    pub height: f64,
    pub cells: Vec<CellReport>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LocateReport {
    pub index: usize,
    pub site: [f64; 2],
    pub record: Record,
}

/// Records with both coordinates defined, projected through nice linear
/// scales into the bounded chart area (y grows downward)
#[derive(Debug, Clone)]
pub struct Scatter {
    pub x_scale: LinearScale,
    pub y_scale: LinearScale,
    /// Record index of every site
    pub indices: Vec<usize>,
    pub voronoi: Voronoi,
}

impl Scatter {
    pub fn build(
        records: &[Record],
        x: &FieldAccessor,
        y: &FieldAccessor,
        dimensions: &Dimensions,
    ) -> Result<Self> {
        let bounds = ClipBounds::from_dimensions(dimensions)?;

        let mut indices = Vec::new();
        for (i, record) in records.iter().enumerate() {
            if let (Some(xv), Some(yv)) = (x.value(record)?, y.value(record)?) {
                if !xv.is_nan() && !yv.is_nan() {
                    indices.push(i);
                }
            }
        }
        let plotted: Vec<Record> = indices.iter().map(|&i| records[i].clone()).collect();

        let x_domain = extent(&plotted, x)?
            .with_context(|| format!("no numeric values for {}", x.field()))?;
        let y_domain = extent(&plotted, y)?
            .with_context(|| format!("no numeric values for {}", y.field()))?;

        let x_scale = LinearScale::default()
            .with_domain(x_domain)
            .with_range((0.0, bounds.width()))
            .nice(None);
        let y_scale = LinearScale::default()
            .with_domain(y_domain)
            .with_range((bounds.height(), 0.0))
            .nice(None);

        let mut points = Vec::with_capacity(plotted.len());
        for record in &plotted {
            if let (Some(xv), Some(yv)) = (x.value(record)?, y.value(record)?) {
                points.push([x_scale.scale(xv), y_scale.scale(yv)]);
            }
        }
        debug!(
            "projected {} of {} records, x domain {:?}, y domain {:?}",
            points.len(),
            records.len(),
            x_scale.domain(),
            y_scale.domain()
        );

        let voronoi = Voronoi::new(&points, bounds)?;
        Ok(Self {
            x_scale,
            y_scale,
            indices,
            voronoi,
        })
    }

    pub fn report(&self) -> VoronoiReport {
        let bounds = self.voronoi.bounds();
        VoronoiReport {
            width: bounds.width(),
            height: bounds.height(),
            cells: self
                .voronoi
                .iter()
                .zip(self.indices.iter())
                .map(|((site, cell), &index)| CellReport {
                    index,
                    site,
                    polygon: cell.exterior().points().map(|p| [p.x(), p.y()]).collect(),
                })
                .collect(),
        }
    }

    /// Record under a pixel location of the bounded area
    pub fn locate(&self, records: &[Record], px: f64, py: f64) -> Option<LocateReport> {
        let site = self.voronoi.locate(px, py)?;
        let index = *self.indices.get(site)?;
        Some(LocateReport {
            index,
            site: self.voronoi.delaunay().points()[site],
            record: records.get(index)?.clone(),
        })
    }
}
