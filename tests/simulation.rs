use std::time::Duration;

use sparse_life::application::{PointerButton, SimulationController, SimulationEvent};
use sparse_life::config::SimulationConfig;
use sparse_life::domain::{Cell, CellSet};
use sparse_life::error::{Error, Result};
use sparse_life::rendering::{HeadlessSink, Primitive};

fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}

/// 500x500 viewport at density 50: 10 px squares
fn controller() -> Result<SimulationController<HeadlessSink>> {
    SimulationController::new(&SimulationConfig::default(), 500.0, 500.0, HeadlessSink::new())
}

fn blinker() -> [Cell; 3] {
    [Cell::new(10, 10), Cell::new(11, 10), Cell::new(12, 10)]
}

/// Cell buffer contents as of the last draw
fn drawn_cells(c: &mut SimulationController<HeadlessSink>) -> Result<Vec<f32>> {
    c.renderer_mut().sink_mut().clear_draws();
    c.draw()?;
    let sink = c.renderer().sink();
    let cells = sink.draws()[1];
    assert_eq!(cells.primitive, Primitive::Triangles);
    Ok(sink.array_contents(cells.array).unwrap_or_default().to_vec())
}

#[test]
fn paint_while_paused_is_visible_after_refresh_tick() -> Result<()> {
    let mut c = controller()?;
    assert_eq!(drawn_cells(&mut c)?, vec![0.0, 0.0]);

    let edit = c.pointer_drag(15.0, 485.0, PointerButton::Primary);
    assert!(edit.is_some());
    assert!(c.cells().contains(Cell::new(1, 1)));

    let ticks = c.advance(ms(10))?;
    assert!(ticks.refresh);
    assert!(!c.is_running());
    assert_eq!(
        drawn_cells(&mut c)?,
        vec![10.0, 10.0, 20.0, 10.0, 20.0, 20.0, 20.0, 20.0, 10.0, 20.0, 10.0, 10.0]
    );
    Ok(())
}

#[test]
fn running_blinker_oscillates_and_reports_counts() -> Result<()> {
    let mut c = controller()?;
    c.cells_mut().extend(blinker());
    let start: CellSet = blinker().into_iter().collect();
    c.toggle_run();

    // 30 Hz: one step every 33 ms
    c.advance(ms(33))?;
    assert_eq!(c.generation(), 1);
    assert_ne!(c.cells(), &start);

    c.advance(ms(33))?;
    assert_eq!(c.generation(), 2);
    assert_eq!(c.cells(), &start);

    assert_eq!(
        c.drain_events(),
        vec![
            SimulationEvent::RunningStateChanged(true),
            SimulationEvent::LiveCellCountChanged(3),
            SimulationEvent::LiveCellCountChanged(3),
        ]
    );
    Ok(())
}

#[test]
fn draw_puts_grid_beneath_cells() -> Result<()> {
    let mut c = controller()?;
    c.renderer_mut().sink_mut().clear_draws();
    c.draw()?;
    let draws = c.renderer().sink().draws();
    assert_eq!(draws.len(), 2);
    assert_eq!(draws[0].primitive, Primitive::Lines);
    assert_eq!(draws[0].vertex_count, 4 * 50);
    assert_eq!(draws[1].primitive, Primitive::Triangles);
    Ok(())
}

#[test]
fn slowing_step_frequency_never_steps_early() -> Result<()> {
    let mut c = controller()?;
    c.cells_mut().extend(blinker());
    c.toggle_run();

    c.set_step_frequency(60);
    c.advance(ms(16))?;
    assert_eq!(c.generation(), 1);

    c.set_step_frequency(1);
    for _ in 0..99 {
        c.advance(ms(10))?;
    }
    assert_eq!(c.generation(), 1);
    c.advance(ms(10))?;
    assert_eq!(c.generation(), 2);
    Ok(())
}

#[test]
fn pausing_stops_steps_but_not_refreshes() -> Result<()> {
    let mut c = controller()?;
    c.cells_mut().extend(blinker());
    c.toggle_run();
    c.advance(ms(33))?;
    c.toggle_run();

    let uploads = c.renderer().sink().uploads();
    for _ in 0..10 {
        c.advance(ms(33))?;
    }
    assert_eq!(c.generation(), 1);
    assert!(c.renderer().sink().uploads() > uploads);
    Ok(())
}

#[test]
fn resize_changes_rendered_size_not_coordinates() -> Result<()> {
    let mut c = controller()?;
    c.cells_mut().insert(Cell::new(2, 0));
    c.resize(1000.0, 500.0);
    assert_eq!(c.renderer().sink().viewport(), Some((1000.0, 500.0)));
    c.refresh()?;

    assert!(c.cells().contains(Cell::new(2, 0)));
    let quad = drawn_cells(&mut c)?;
    // 20 px squares now
    assert_eq!(&quad[..4], &[40.0, 0.0, 60.0, 0.0]);

    c.pointer_drag(45.0, 499.0, PointerButton::Secondary);
    assert!(c.cells().is_empty());
    Ok(())
}

#[test]
fn density_change_rebuilds_grid_immediately() -> Result<()> {
    let mut c = controller()?;
    c.set_density(20)?;
    c.renderer_mut().sink_mut().clear_draws();
    c.draw()?;
    assert_eq!(c.renderer().sink().draws()[0].vertex_count, 4 * 20);
    assert!(c.drain_events().is_empty());
    Ok(())
}

#[test]
fn lost_context_is_fatal() -> Result<()> {
    let mut c = controller()?;
    c.renderer_mut().sink_mut().lose_context();
    assert!(matches!(c.advance(ms(10)), Err(Error::ContextLost(_))));
    assert!(matches!(c.draw(), Err(Error::ContextLost(_))));
    Ok(())
}

#[test]
fn painted_cells_outside_window_never_reproduce() -> Result<()> {
    let mut c = controller()?;
    // Right of the birth window a blinker can only lose cells
    c.cells_mut().extend([Cell::new(90, 5), Cell::new(90, 6), Cell::new(90, 7)]);
    c.step();
    let expected: CellSet = [Cell::new(90, 6)].into_iter().collect();
    assert_eq!(c.cells(), &expected);
    assert_eq!(c.live_count(), 1);
    Ok(())
}
