//! Relative pose and landmark measurements between two planar poses.
//!
//! ```bash
//! cargo run --example relative_pose -- --from 0,0,0 --to 1,2,1.57 --landmark 3,1
//! RUST_LOG=planar_pose=debug cargo run --example relative_pose
//! ```

use clap::Parser;
use nalgebra::{Matrix1x2, Matrix1x3, Matrix3};
use planar_pose::{
    PlanarPoseResult, Point2, Pose2, between, bearing_with_jacobians, init_logger,
    range_with_jacobians,
};
use tracing::{error, info};

#[derive(Parser)]
#[command(name = "relative_pose")]
#[command(about = "Relative pose, bearing and range between planar poses, with Jacobians")]
struct Args {
    /// First pose as x,y,theta
    #[arg(long, value_parser = parse_pose, default_value = "0,0,0")]
    from: Pose2,

    /// Second pose as x,y,theta
    #[arg(long, value_parser = parse_pose, default_value = "1,2,1.5707963267948966")]
    to: Pose2,

    /// Landmark observed from the first pose, as x,y
    #[arg(long, value_parser = parse_point, default_value = "3,1")]
    landmark: Point2,
}

fn parse_numbers(s: &str, count: usize) -> Result<Vec<f64>, String> {
    let values = s
        .split(',')
        .map(|part| part.trim().parse::<f64>().map_err(|e| e.to_string()))
        .collect::<Result<Vec<_>, _>>()?;
    if values.len() != count {
        return Err(format!("expected {count} comma-separated numbers, got {}", values.len()));
    }
    Ok(values)
}

fn parse_pose(s: &str) -> Result<Pose2, String> {
    let v = parse_numbers(s, 3)?;
    Ok(Pose2::from_xy_angle(v[0], v[1], v[2]))
}

fn parse_point(s: &str) -> Result<Point2, String> {
    let v = parse_numbers(s, 2)?;
    Ok(Point2::new(v[0], v[1]))
}

fn run(args: &Args) -> PlanarPoseResult<()> {
    info!("from:     {}", args.from);
    info!("to:       {}", args.to);
    info!("landmark: {}", args.landmark);

    let mut h1 = Matrix3::zeros();
    let mut h2 = Matrix3::zeros();
    let relative = between(&args.from, &args.to, Some(&mut h1), Some(&mut h2));
    info!("between:  {}", relative);
    info!("d between / d from:{}", h1);
    info!("d between / d to:{}", h2);

    let mut b_pose = Matrix1x3::zeros();
    let mut b_point = Matrix1x2::zeros();
    let direction = bearing_with_jacobians(
        &args.from,
        &args.landmark,
        Some(&mut b_pose),
        Some(&mut b_point),
    )?;
    info!("bearing:  {}", direction);
    info!("d bearing / d pose:{}", b_pose);
    info!("d bearing / d point:{}", b_point);

    let mut r_pose = Matrix1x3::zeros();
    let mut r_point = Matrix1x2::zeros();
    let distance = range_with_jacobians(
        &args.from,
        &args.landmark,
        Some(&mut r_pose),
        Some(&mut r_point),
    )?;
    info!("range:    {:.4}", distance);
    info!("d range / d pose:{}", r_pose);
    info!("d range / d point:{}", r_point);

    Ok(())
}

fn main() {
    init_logger();
    let args = Args::parse();

    if let Err(e) = run(&args) {
        error!("{}", e.chain_compact());
        std::process::exit(1);
    }
}
