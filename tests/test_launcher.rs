use genalg_tsp::{
    city::{CityLayout, CitySetup},
    error::Result,
    evolution::{EvolutionLauncher, EvolutionOptions, PopulationEngine},
    rng::RandomNumberGenerator,
    selection::{TournamentSelection, TournamentSize},
    stats::StatsTracker,
    tour::Tour,
};

#[test]
fn test_circular_layout_improves() -> Result<()> {
    let mut rng = RandomNumberGenerator::from_seed(2025);
    let options = EvolutionOptions::builder()
        .population_size(100)
        .mutation_rate(0.2)
        .build();
    let mut engine = PopulationEngine::new(options)?;
    engine.setup_cities(
        &CitySetup::new(12, 500, 500).with_layout(CityLayout::Circular),
        &mut rng,
    )?;
    engine.initialize_population(&mut rng)?;

    let mut stats = StatsTracker::new();
    let result = EvolutionLauncher::new(300)
        .with_stagnation_limit(150)
        .run(&mut engine, &mut rng, &mut stats)?;

    let initial = engine.initial_best_cost();
    assert!(Some(result.cost) <= initial);
    assert!(StatsTracker::improvement_percentage(initial, result.cost) >= 0.0);
    assert!(Tour::try_new(&result.path, 12).is_ok());
    assert_eq!(stats.recent_costs().back(), Some(&result.cost));
    Ok(())
}

#[test]
fn test_result_matches_engine_state() -> Result<()> {
    let mut rng = RandomNumberGenerator::from_seed(6);
    let mut engine = PopulationEngine::new(EvolutionOptions::default())?;
    engine.setup_cities(&CitySetup::new(15, 300, 200), &mut rng)?;
    engine.initialize_population(&mut rng)?;

    let mut stats = StatsTracker::new();
    let result = EvolutionLauncher::new(40).run(&mut engine, &mut rng, &mut stats)?;

    assert_eq!(result.path, engine.best_path());
    assert_eq!(Some(result.cost), engine.best_cost());
    assert_eq!(result.generations, engine.generation_count());
    assert_eq!(result.total_improvements, engine.total_improvements());

    let tour = Tour::new(&result.path);
    assert_eq!(tour.cost(engine.cities()), result.cost);
    Ok(())
}

#[test]
fn test_consecutive_runs_continue() -> Result<()> {
    let mut rng = RandomNumberGenerator::from_seed(19);
    let mut engine = PopulationEngine::new(EvolutionOptions::default())?;
    engine.setup_cities(&CitySetup::new(10, 300, 300), &mut rng)?;
    engine.initialize_population(&mut rng)?;

    let launcher = EvolutionLauncher::new(10);
    let mut stats = StatsTracker::new();
    let first = launcher.run(&mut engine, &mut rng, &mut stats)?;

    engine.set_mutation_rate(0.5)?;
    engine.set_crossover_rate(0.5)?;
    let second = launcher.run(&mut engine, &mut rng, &mut stats)?;

    assert_eq!(first.generations, 10);
    assert_eq!(second.generations, 20);
    assert!(second.cost <= first.cost);
    assert!(second.total_improvements >= first.total_improvements);
    Ok(())
}

#[test]
fn test_custom_selection_with_launcher() -> Result<()> {
    let mut rng = RandomNumberGenerator::from_seed(4);
    let selection = TournamentSelection::new(TournamentSize::Fixed(5))?;
    let mut engine = PopulationEngine::with_selection(EvolutionOptions::default(), selection)?;
    engine.setup_cities(&CitySetup::new(9, 200, 200), &mut rng)?;
    engine.initialize_population(&mut rng)?;

    let mut stats = StatsTracker::new();
    let mut best_costs = Vec::new();
    EvolutionLauncher::new(25).run_with_observer(&mut engine, &mut rng, &mut stats, |snapshot| {
        best_costs.push(snapshot.best_cost.unwrap())
    })?;

    assert_eq!(best_costs.len(), 25);
    assert!(best_costs.windows(2).all(|pair| pair[1] <= pair[0]));
    Ok(())
}
