//! The configuration enumerator.
//!
//! Groups are processed in index order. At each layer every live branch is
//! bounded against the numbers spanning the group, contradicting branches
//! are dropped and the rest fan out over their feasible values. Bounds for
//! one layer are independent per branch and may be computed in parallel;
//! the frontier is only rebuilt once the whole layer has been bounded.

use mineforge_config::{EnumerationConfig, LayerThreadCount};
use mineforge_core::{reserve, Configurations, MineforgeError, Problem, Result};
use rayon::prelude::*;
use rayon::{ThreadPool, ThreadPoolBuilder};
use tracing::{debug, info, warn};

use crate::bounder::{Bounds, GroupBounder};
use crate::frontier::Frontier;
use crate::islands::{split_islands, IslandSolution};
use crate::materialize::materialize;
use crate::scope::EnumerationScope;
use crate::stats::EnumerationStats;
use crate::termination::{
    NoTermination, NodeCountTermination, OrTermination, Termination, TimeTermination,
};

/// All configurations of a problem together with run statistics.
#[derive(Debug, Clone)]
pub struct Enumeration {
    configurations: Configurations,
    stats: EnumerationStats,
}

impl Enumeration {
    pub fn configurations(&self) -> &Configurations {
        &self.configurations
    }

    pub fn stats(&self) -> &EnumerationStats {
        &self.stats
    }

    /// Number of configurations found.
    pub fn count(&self) -> usize {
        self.configurations.count()
    }

    pub fn into_configurations(self) -> Configurations {
        self.configurations
    }

    pub fn into_parts(self) -> (Configurations, EnumerationStats) {
        (self.configurations, self.stats)
    }
}

/// Per-island configurations that have not been combined yet.
#[derive(Debug, Clone)]
pub struct IslandEnumeration {
    solution: IslandSolution,
    stats: EnumerationStats,
}

impl IslandEnumeration {
    pub fn solution(&self) -> &IslandSolution {
        &self.solution
    }

    pub fn stats(&self) -> &EnumerationStats {
        &self.stats
    }

    pub fn into_parts(self) -> (IslandSolution, EnumerationStats) {
        (self.solution, self.stats)
    }
}

/// Enumerates every configuration satisfying a [`Problem`].
///
/// Guards from the [`EnumerationConfig`] are always applied; an additional
/// guard such as an [`ExternalTermination`](crate::ExternalTermination) can
/// be attached with [`with_termination`](Self::with_termination).
///
/// # Example
///
/// ```
/// use mineforge_config::EnumerationConfig;
/// use mineforge_core::ProblemBuilder;
/// use mineforge_solver::ConfigurationEnumerator;
///
/// let problem = ProblemBuilder::new()
///     .with_groups([1, 1, 1])
///     .with_number(1, [0, 1])
///     .with_number(1, [1, 2])
///     .build()
///     .unwrap();
///
/// let result = ConfigurationEnumerator::new(EnumerationConfig::default())
///     .enumerate(&problem)
///     .unwrap();
/// let found: Vec<_> = result.configurations().iter().map(|c| c.values().to_vec()).collect();
/// assert_eq!(found, vec![vec![0, 1, 0], vec![1, 0, 1]]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigurationEnumerator<T = NoTermination> {
    config: EnumerationConfig,
    termination: T,
}

impl ConfigurationEnumerator<NoTermination> {
    pub fn new(config: EnumerationConfig) -> Self {
        Self {
            config,
            termination: NoTermination,
        }
    }
}

impl<T: Termination> ConfigurationEnumerator<T> {
    /// Replaces the extra termination guard.
    pub fn with_termination<U: Termination>(self, termination: U) -> ConfigurationEnumerator<U> {
        ConfigurationEnumerator {
            config: self.config,
            termination,
        }
    }

    pub fn config(&self) -> &EnumerationConfig {
        &self.config
    }

    /// Enumerates all configurations of `problem`.
    ///
    /// # Errors
    ///
    /// - [`MineforgeError::Terminated`] when a guard fires
    /// - [`MineforgeError::Allocation`] when the frontier or result cannot be held
    /// - [`MineforgeError::Config`] when the configuration cannot be honored
    ///
    /// No partial result is returned in any error case.
    pub fn enumerate(&self, problem: &Problem) -> Result<Enumeration> {
        if self.config.split_islands {
            let (solution, stats) = self.enumerate_islands(problem)?.into_parts();
            let mut configurations = solution.expand()?;
            if self.config.sort_output {
                configurations.sort();
            }
            return Ok(Enumeration {
                configurations,
                stats,
            });
        }

        let runner = LayerRunner::new(&self.config)?;
        let guard = self.guard();
        let mut scope = EnumerationScope::new();
        self.log_start(problem, &runner);

        scope.record_island();
        let mut configurations = run_layers(problem, &runner, &guard, &mut scope)?;
        if self.config.sort_output {
            configurations.sort();
        }

        let stats = scope.into_stats();
        log_end(&stats, configurations.count());
        Ok(Enumeration {
            configurations,
            stats,
        })
    }

    /// Enumerates each island of `problem` separately.
    ///
    /// Guards see the cumulative branch count and elapsed time across all
    /// islands. An island without configurations stops the run early: the
    /// remaining islands are skipped and the solution expands to nothing.
    ///
    /// # Errors
    ///
    /// See [`enumerate`](Self::enumerate).
    pub fn enumerate_islands(&self, problem: &Problem) -> Result<IslandEnumeration> {
        let runner = LayerRunner::new(&self.config)?;
        let guard = self.guard();
        let mut scope = EnumerationScope::new();
        self.log_start(problem, &runner);

        let islands = split_islands(problem)?;
        let mut parts = Vec::new();
        reserve(&mut parts, islands.len(), "islands")?;

        for (index, island) in islands.into_iter().enumerate() {
            info!(
                event = "island_start",
                island = index as u64,
                groups = island.groups().len() as u64,
            );
            scope.record_island();
            let mut configurations = run_layers(island.problem(), &runner, &guard, &mut scope)?;
            if self.config.sort_output {
                configurations.sort();
            }
            info!(
                event = "island_end",
                island = index as u64,
                configurations = configurations.count() as u64,
            );

            let exhausted = configurations.is_empty();
            let (groups, _) = island.into_parts();
            parts.push((groups, configurations));
            if exhausted {
                break;
            }
        }

        let solution = IslandSolution::new(problem.n_groups(), parts);
        let stats = scope.into_stats();
        log_end(&stats, solution.count().unwrap_or(usize::MAX));
        Ok(IslandEnumeration { solution, stats })
    }

    fn guard(&self) -> OrTermination<(
        Option<NodeCountTermination>,
        Option<TimeTermination>,
        &T,
    )> {
        OrTermination((
            self.config.node_limit.map(NodeCountTermination::new),
            self.config.time_limit().map(TimeTermination::new),
            &self.termination,
        ))
    }

    fn log_start(&self, problem: &Problem, runner: &LayerRunner) {
        info!(
            event = "enumeration_start",
            groups = problem.n_groups() as u64,
            numbers = problem.numbers().count() as u64,
            threads = runner.threads() as u64,
            split_islands = self.config.split_islands,
        );
    }
}

fn log_end(stats: &EnumerationStats, configurations: usize) {
    info!(
        event = "enumeration_end",
        duration_ms = stats.elapsed.as_millis() as u64,
        configurations = configurations as u64,
        branches = stats.branches_created,
        pruned = stats.branches_pruned,
        peak_frontier = stats.peak_frontier as u64,
        speed = stats.branches_per_second() as u64,
    );
}

// How bounds for one layer are computed.
struct LayerRunner {
    mode: LayerThreadCount,
    pool: Option<ThreadPool>,
    threshold: usize,
}

impl LayerRunner {
    fn new(config: &EnumerationConfig) -> Result<Self> {
        config
            .validate()
            .map_err(|e| MineforgeError::Config(e.to_string()))?;
        let pool = match config.layer_thread_count {
            LayerThreadCount::Count(n) => Some(
                ThreadPoolBuilder::new()
                    .num_threads(n)
                    .thread_name(|i| format!("mineforge-layer-{i}"))
                    .build()
                    .map_err(|e| MineforgeError::Config(e.to_string()))?,
            ),
            LayerThreadCount::Auto | LayerThreadCount::None => None,
        };
        Ok(Self {
            mode: config.layer_thread_count,
            pool,
            threshold: config.parallel_threshold,
        })
    }

    fn threads(&self) -> usize {
        match self.mode {
            LayerThreadCount::None => 1,
            LayerThreadCount::Auto => rayon::current_num_threads(),
            LayerThreadCount::Count(n) => n,
        }
    }

    fn bounds(
        &self,
        frontier: &Frontier,
        bounder: &GroupBounder,
        layer: usize,
        out: &mut Vec<Bounds>,
    ) -> Result<()> {
        out.clear();
        reserve(out, frontier.len(), "layer bounds")?;

        let parallel =
            self.mode != LayerThreadCount::None && frontier.len() >= self.threshold;
        if !parallel {
            out.extend(frontier.branches().map(|b| bounder.bounds(layer, b)));
            return Ok(());
        }

        let compute = |out: &mut Vec<Bounds>| {
            frontier
                .par_branches()
                .map(|b| bounder.bounds(layer, b))
                .collect_into_vec(out)
        };
        match &self.pool {
            Some(pool) => pool.install(|| compute(out)),
            None => compute(out),
        }
        Ok(())
    }
}

fn run_layers(
    problem: &Problem,
    runner: &LayerRunner,
    guard: &impl Termination,
    scope: &mut EnumerationScope,
) -> Result<Configurations> {
    let bounder = GroupBounder::new(problem);
    let mut frontier = Frontier::initialize(problem.n_groups())?;
    scope.record_created(1);

    let mut bounds = Vec::new();
    for layer in 0..bounder.n_layers() {
        if frontier.is_empty() {
            break;
        }
        scope.begin_layer(layer);
        runner.bounds(&frontier, &bounder, layer, &mut bounds)?;

        let siblings = bounds
            .iter()
            .fold(0u64, |acc, b| acc.saturating_add(b.siblings()));
        scope.record_created(siblings);
        if let Some(reason) = guard.check(scope) {
            warn!(
                event = "enumeration_aborted",
                layer = layer as u64,
                width = frontier.len() as u64,
                branches = scope.branches_created(),
                reason = %reason,
            );
            return Err(MineforgeError::Terminated(reason));
        }

        let outcome = frontier.extend_layer(layer, &bounds)?;
        scope.finish_layer(outcome.pruned, frontier.len());
        debug!(
            event = "layer_end",
            layer = layer as u64,
            width = frontier.len() as u64,
            kept = outcome.kept as u64,
            pruned = outcome.pruned as u64,
            spawned = outcome.spawned as u64,
        );
    }

    materialize(&frontier)
}
