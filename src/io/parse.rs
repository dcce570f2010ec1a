//! Parser for the `%`-commented problem text format.

use std::fs;
use std::path::Path;

use anyhow::{anyhow, ensure, Context, Result};

use crate::models::{Call, Problem, TimeWindow, Vehicle};

/// Reads and parses a problem file.
///
/// See [`parse_problem`] for the format.
pub fn load_problem(path: impl AsRef<Path>) -> Result<Problem> {
    let path = path.as_ref();
    let text = fs::read_to_string(path)
        .with_context(|| format!("reading problem file {}", path.display()))?;
    parse_problem(&text)
}

/// Parses a problem instance from the text format.
///
/// Lines starting with `%` are section headers/comments and are skipped.
/// The data lines are, in order:
///
/// 1. number of nodes
/// 2. number of vehicles
/// 3. per vehicle: `index, home_node, start_time, capacity`
/// 4. number of calls
/// 5. per vehicle: `index, call, call, ...` (compatible calls)
/// 6. per call: `index, origin, dest, size, penalty, pickup_earliest,
///    pickup_latest, delivery_earliest, delivery_latest`
/// 7. `vehicles * nodes * nodes` records: `vehicle, from, to, time, cost`
/// 8. `vehicles * calls` records: `vehicle, call, loading_time,
///    origin_cost, unloading_time, dest_cost`
///
/// All node, vehicle, and call indices in the file are 1-based. The parser
/// folds each vehicle's start time into `first_travel_time` and combines
/// the origin and destination handling costs into `port_cost`, so the
/// evaluators never touch the raw records.
///
/// A missing or malformed section fails with an error naming the section.
pub fn parse_problem(text: &str) -> Result<Problem> {
    let mut cursor = Cursor::new(text);

    let num_nodes = cursor.scalar("number of nodes")?;
    let num_vehicles = cursor.scalar("number of vehicles")?;

    let mut vehicles = Vec::with_capacity(num_vehicles);
    for i in 0..num_vehicles {
        let fields = cursor.record("vehicles", 4)?;
        let home = index_field(fields[1], num_nodes)
            .with_context(|| format!("vehicle {}: home node out of range", i + 1))?;
        vehicles.push(Vehicle::new(home, fields[2], fields[3]));
    }

    let num_calls = cursor.scalar("number of calls")?;

    let mut compatible = vec![false; num_vehicles * num_calls];
    for v in 0..num_vehicles {
        let fields = cursor.record_var("vehicle compatibility")?;
        ensure!(
            !fields.is_empty(),
            "vehicle compatibility: empty record for vehicle {}",
            v + 1
        );
        for &value in &fields[1..] {
            let c = index_field(value, num_calls)
                .with_context(|| format!("vehicle {}: compatible call out of range", v + 1))?;
            compatible[v * num_calls + c] = true;
        }
    }

    let mut calls = Vec::with_capacity(num_calls);
    for i in 0..num_calls {
        let fields = cursor.record("calls", 9)?;
        let origin = index_field(fields[1], num_nodes)
            .with_context(|| format!("call {}: origin node out of range", i + 1))?;
        let destination = index_field(fields[2], num_nodes)
            .with_context(|| format!("call {}: destination node out of range", i + 1))?;
        let pickup = TimeWindow::new(fields[5], fields[6])
            .ok_or_else(|| anyhow!("call {}: invalid pickup window", i + 1))?;
        let delivery = TimeWindow::new(fields[7], fields[8])
            .ok_or_else(|| anyhow!("call {}: invalid delivery window", i + 1))?;
        calls.push(Call::new(
            origin,
            destination,
            fields[3],
            fields[4],
            pickup,
            delivery,
        ));
    }

    let mut travel_time = vec![0.0; num_vehicles * num_nodes * num_nodes];
    let mut travel_cost = vec![0.0; num_vehicles * num_nodes * num_nodes];
    for _ in 0..num_vehicles * num_nodes * num_nodes {
        let fields = cursor.record("travel times and costs", 5)?;
        let v = index_field(fields[0], num_vehicles)
            .context("travel times and costs: vehicle out of range")?;
        let from = index_field(fields[1], num_nodes)
            .context("travel times and costs: origin node out of range")?;
        let to = index_field(fields[2], num_nodes)
            .context("travel times and costs: destination node out of range")?;
        let idx = (v * num_nodes + from) * num_nodes + to;
        travel_time[idx] = fields[3];
        travel_cost[idx] = fields[4];
    }

    let mut loading_time = vec![0.0; num_vehicles * num_calls];
    let mut unloading_time = vec![0.0; num_vehicles * num_calls];
    let mut port_cost = vec![0.0; num_vehicles * num_calls];
    for _ in 0..num_vehicles * num_calls {
        let fields = cursor.record("node times and costs", 6)?;
        let v = index_field(fields[0], num_vehicles)
            .context("node times and costs: vehicle out of range")?;
        let c = index_field(fields[1], num_calls)
            .context("node times and costs: call out of range")?;
        loading_time[v * num_calls + c] = fields[2];
        unloading_time[v * num_calls + c] = fields[4];
        port_cost[v * num_calls + c] = fields[3] + fields[5];
    }

    // Precompute the home-node legs; the time variant carries the
    // vehicle's start time so the evaluators begin at logical time zero.
    let mut first_travel_time = vec![0.0; num_vehicles * num_nodes];
    let mut first_travel_cost = vec![0.0; num_vehicles * num_nodes];
    for (v, vehicle) in vehicles.iter().enumerate() {
        let home = vehicle.home_node();
        for j in 0..num_nodes {
            let idx = (v * num_nodes + home) * num_nodes + j;
            first_travel_time[v * num_nodes + j] = travel_time[idx] + vehicle.start_time();
            first_travel_cost[v * num_nodes + j] = travel_cost[idx];
        }
    }

    Problem::new(
        num_nodes,
        vehicles,
        calls,
        compatible,
        travel_time,
        travel_cost,
        first_travel_time,
        first_travel_cost,
        loading_time,
        unloading_time,
        port_cost,
    )
}

/// Converts a 1-based index field to a 0-based index, checking the range.
fn index_field(value: f64, upper: usize) -> Result<usize> {
    ensure!(
        value >= 1.0 && value <= upper as f64 && value.fract() == 0.0,
        "index {} not in 1..={}",
        value,
        upper
    );
    Ok(value as usize - 1)
}

/// Cursor over the data lines of a problem file.
struct Cursor<'a> {
    lines: Vec<&'a str>,
    pos: usize,
}

impl<'a> Cursor<'a> {
    fn new(text: &'a str) -> Self {
        let lines = text
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty() && !l.starts_with('%'))
            .collect();
        Self { lines, pos: 0 }
    }

    fn next_line(&mut self, section: &str) -> Result<&'a str> {
        let line = self
            .lines
            .get(self.pos)
            .ok_or_else(|| anyhow!("unexpected end of file in section '{}'", section))?;
        self.pos += 1;
        Ok(line)
    }

    fn scalar(&mut self, section: &str) -> Result<usize> {
        self.next_line(section)?
            .parse()
            .with_context(|| format!("section '{}': expected an integer", section))
    }

    fn record_var(&mut self, section: &str) -> Result<Vec<f64>> {
        let line = self.next_line(section)?;
        line.split(',')
            .map(|field| {
                field
                    .trim()
                    .parse::<f64>()
                    .with_context(|| format!("section '{}': bad number '{}'", section, field))
            })
            .collect()
    }

    fn record(&mut self, section: &str, len: usize) -> Result<Vec<f64>> {
        let fields = self.record_var(section)?;
        ensure!(
            fields.len() == len,
            "section '{}': expected {} fields, found {}",
            section,
            len,
            fields.len()
        );
        Ok(fields)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SMALL: &str = "\
% number of nodes
2
% number of vehicles
1
% for each vehicle: vehicle index, home node, starting time, capacity
1,1,7,10
% number of calls
1
% for each vehicle: vehicle index, list of transportable calls
1,1
% for each call: index, origin, dest, size, penalty, pickup window, delivery window
1,1,2,5,100,0,100,0,200
% travel times and costs: vehicle, origin, destination, time, cost
1,1,1,0,0
1,1,2,10,30
1,2,1,10,30
1,2,2,0,0
% node times and costs: vehicle, call, loading time, origin cost, unloading time, destination cost
1,1,2,60,3,40
";

    #[test]
    fn test_parse_small_instance() {
        let p = parse_problem(SMALL).expect("parses");
        assert_eq!(p.num_nodes(), 2);
        assert_eq!(p.num_vehicles(), 1);
        assert_eq!(p.num_calls(), 1);

        let v = p.vehicle(0);
        assert_eq!(v.home_node(), 0);
        assert_eq!(v.start_time(), 7.0);
        assert_eq!(v.capacity(), 10.0);

        let c = p.call(0);
        assert_eq!(c.origin(), 0);
        assert_eq!(c.destination(), 1);
        assert_eq!(c.size(), 5.0);
        assert_eq!(c.penalty(), 100.0);
        assert_eq!(c.pickup_window().latest(), 100.0);
        assert_eq!(c.delivery_window().latest(), 200.0);

        assert!(p.compatible(0, 0));
        assert_eq!(p.travel_time(0, 0, 1), 10.0);
        assert_eq!(p.travel_cost(0, 1, 0), 30.0);

        // Home legs fold in the start time (time only).
        assert_eq!(p.first_travel_time(0, 0), 7.0);
        assert_eq!(p.first_travel_time(0, 1), 17.0);
        assert_eq!(p.first_travel_cost(0, 1), 30.0);

        assert_eq!(p.loading_time(0, 0), 2.0);
        assert_eq!(p.unloading_time(0, 0), 3.0);
        assert_eq!(p.port_cost(0, 0), 100.0);
    }

    #[test]
    fn test_parse_truncated_file() {
        let truncated: String = SMALL.lines().take(14).collect::<Vec<_>>().join("\n");
        let err = parse_problem(&truncated).expect_err("missing records");
        assert!(err
            .to_string()
            .contains("unexpected end of file in section 'travel times and costs'"));
    }

    #[test]
    fn test_parse_bad_record_width() {
        let broken = SMALL.replace("1,1,2,5,100,0,100,0,200", "1,1,2,5,100");
        let err = parse_problem(&broken).expect_err("short call record");
        assert!(err.to_string().contains("expected 9 fields"));
    }

    #[test]
    fn test_parse_out_of_range_node() {
        let broken = SMALL.replace("1,1,2,5,100,0,100,0,200", "1,1,9,5,100,0,100,0,200");
        let err = parse_problem(&broken).expect_err("node 9 of 2");
        assert!(err.to_string().contains("call 1: destination node"));
    }

    #[test]
    fn test_parse_bad_number() {
        let broken = SMALL.replace("1,1,7,10", "1,one,7,10");
        let err = parse_problem(&broken).expect_err("not a number");
        assert!(err.to_string().contains("bad number"));
    }

    #[test]
    fn test_parse_invalid_window() {
        let broken = SMALL.replace("1,1,2,5,100,0,100,0,200", "1,1,2,5,100,100,0,0,200");
        let err = parse_problem(&broken).expect_err("earliest > latest");
        assert!(err.to_string().contains("invalid pickup window"));
    }

    #[test]
    fn test_loaded_instance_evaluates() {
        use crate::evaluation::{check_feasibility, solution_cost};
        use crate::models::Solution;

        let p = parse_problem(SMALL).expect("parses");
        let s = Solution::new(vec![1, 1, 0], &p).expect("valid");
        // Pickup arrival max(0 + 7, 0) = 7, depart 9; delivery arrival
        // 9 + 10 = 19 < 200.
        assert!(check_feasibility(&p, &s).is_feasible());
        // Home leg 0 + leg 0->1 (30) + port 100.
        assert!((solution_cost(&p, &s) - 130.0).abs() < 1e-10);
    }
}
