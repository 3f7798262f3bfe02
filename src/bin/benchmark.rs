//! Performance benchmark: sparse stepping strategies and buffer rebuilds

use std::time::Instant;

use rand::SeedableRng;
use rand::rngs::StdRng;
use sparse_life::domain::{Algorithm, AutomatonEngine, BirthWindow, CellSet};
use sparse_life::rendering::{HeadlessSink, RenderBufferSync, build_cell_quads, build_grid_lines};

/// Random soup filling a `size` x `size` window at 30%
fn soup(size: i32) -> (CellSet, BirthWindow) {
    let window = BirthWindow::new(0, size - 1);
    let mut cells = CellSet::new();
    cells.randomize(window, 0.3, &mut StdRng::seed_from_u64(size as u64));
    (cells, window)
}

fn benchmark_step(size: i32, algorithm: Algorithm, iterations: u32) -> f64 {
    let (mut cells, window) = soup(size);
    let engine = AutomatonEngine::new(window, algorithm);

    let start = Instant::now();
    for _ in 0..iterations {
        cells = engine.step(&cells).cells;
    }
    start.elapsed().as_secs_f64() * 1000.0 / iterations as f64
}

fn benchmark_refresh(size: i32, iterations: u32) -> sparse_life::Result<f64> {
    let (cells, _) = soup(size);
    let mut sync = RenderBufferSync::new(HeadlessSink::new())?;
    let cell_size = 1000.0 / size as f32;

    let start = Instant::now();
    for _ in 0..iterations {
        sync.upload_grid(&build_grid_lines(80, cell_size, 1000.0, 1000.0))?;
        sync.upload_cells(&build_cell_quads(&cells, cell_size))?;
    }
    Ok(start.elapsed().as_secs_f64() * 1000.0 / iterations as f64)
}

fn main() -> sparse_life::Result<()> {
    println!("=== Sparse Life Performance Benchmark ===\n");

    let sizes = [50, 81, 150, 300];
    let iterations = 20;

    println!("{:>10} {:>10} {:>12} {:>12} {:>12} {:>10}",
        "Window", "Cells", "Sparse", "Sparse+Par", "Refresh", "Speedup");
    println!("{:-<72}", "");

    for size in sizes {
        let live = soup(size).0.len();
        let sequential_ms = benchmark_step(size, Algorithm::Sequential, iterations);
        let parallel_ms = benchmark_step(size, Algorithm::Parallel, iterations);
        let refresh_ms = benchmark_refresh(size, iterations)?;

        println!(
            "{:>10} {:>10} {:>12.2} {:>12.2} {:>12.2} {:>9.1}x",
            format!("{}x{}", size, size),
            live,
            sequential_ms,
            parallel_ms,
            refresh_ms,
            sequential_ms / parallel_ms
        );
    }

    Ok(())
}
