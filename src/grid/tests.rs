use {
  super::*,
  crate::geometry::BoundingBox,
  anyhow::Result,
  euclid::Size2D
};

fn config(radius: f64, width: u32, height: u32) -> Result<Config> {
  Ok(Config::new(radius, Size2D::new(width, height))?)
}

#[test] fn row_stagger() -> Result<()> {
  let config = config(20.0, 200, 200)?;
  let planner = GridPlanner::new(config);
  assert_eq!(planner.center_at(0, 0), P2::new(0.0, 0.0));
  assert_eq!(planner.center_at(1, 0).x, config.hex_width() / 2.0);
  assert_eq!(planner.center_at(1, 0).y, config.row_pitch());
  assert_eq!(planner.center_at(2, 3), P2::new(120.0, 2.0 * config.hex_height() * 0.75));
  Ok(())
}

#[test] fn over_covering_counts() -> Result<()> {
  let planner = GridPlanner::new(config(20.0, 100, 60)?);
  // 100 / 40 = 2.5, 60 / 25.98 = 2.3
  assert_eq!(planner.cols(), 4);
  assert_eq!(planner.rows(), 4);
  Ok(())
}

#[test] fn counts_saturate() {
  let config = Config { hex_radius: 1e-7, width: 1000, height: 1000 };
  let planner = GridPlanner::new(config);
  assert_eq!(planner.rows(), u32::MAX);
  assert_eq!(planner.cols(), u32::MAX);
  let (_, upper) = planner.centers().size_hint();
  assert!(upper.is_some());
}

#[test] fn tiny_image_single_center() -> Result<()> {
  let centers = plan_centers(&config(20.0, 3, 3)?).collect::<Vec<_>>();
  assert_eq!(centers, vec![HexCenter { row: 0, col: 0, point: P2::new(0.0, 0.0) }]);
  Ok(())
}

#[test] fn row_major_order() -> Result<()> {
  let centers = plan_centers(&config(10.0, 64, 48)?).collect::<Vec<_>>();
  assert!(!centers.is_empty());
  centers.windows(2).for_each(|pair| {
    let (a, b) = (pair[0], pair[1]);
    assert!((a.row, a.col) < (b.row, b.col), "{:?} before {:?}", a, b);
  });
  Ok(())
}

#[test] fn culling() -> Result<()> {
  let config = config(10.0, 64, 48)?;
  let planner = GridPlanner::new(config);
  let total = (planner.rows() * planner.cols()) as usize;
  let kept = plan_centers(&config)
    .inspect(|center| assert!(planner.is_visible(center.point)))
    .count();
  assert!(kept < total);

  assert!(planner.is_visible(P2::new(-10.0, -10.0)));
  assert!(planner.is_visible(P2::new(74.0, 58.0)));
  assert!(!planner.is_visible(P2::new(74.5, 0.0)));
  assert!(!planner.is_visible(P2::new(0.0, -10.5)));
  Ok(())
}

#[test] fn size_hint_is_upper_bound() -> Result<()> {
  let config = config(7.5, 50, 31)?;
  let mut centers = plan_centers(&config);
  let (_, upper) = centers.size_hint();
  let upper = upper.unwrap_or(usize::MAX);
  centers.next();
  assert!(centers.count() < upper);
  Ok(())
}

#[test] fn restartable() -> Result<()> {
  let config = config(12.0, 90, 70)?;
  let a = plan_centers(&config).collect::<Vec<_>>();
  let b = plan_centers(&config).collect::<Vec<_>>();
  assert_eq!(a, b);
  Ok(())
}

#[test] fn full_coverage() -> Result<()> {
  for (radius, width, height) in [
    (20.0, 3, 3),
    (20.0, 41, 41),
    (5.0, 97, 33),
    (3.3, 17, 120),
    (50.0, 400, 10),
    (0.75, 9, 9),
  ] {
    let config = config(radius, width, height)?;
    let planner = GridPlanner::new(config);
    let squares = plan_centers(&config)
      .map(|center| planner.hexagon(&center).bounding_box())
      .collect::<Vec<_>>();
    itertools::iproduct!(0..height, 0..width)
      .for_each(|(y, x)| {
        let pixel = P2::new(x as f64 + 0.5, y as f64 + 0.5);
        assert!(
          squares.iter().any(|square| square.contains(pixel)),
          "pixel ({}, {}) uncovered, radius {}", x, y, radius
        );
      });

    let union = coverage(&config).ok_or_else(|| anyhow::anyhow!("no hexagons"))?;
    assert!(union.min.x <= 0.0 && union.min.y <= 0.0);
    assert!(union.max.x >= width as f64 && union.max.y >= height as f64);
  }
  Ok(())
}
