//! Fluent builder for constructing a [`Scene`].

use std::collections::HashSet;

use cs_behavior::{Agent, AgentProfile, AgentRecord, Venue};
use cs_core::EngineConfig;
use cs_epidemic::SpreadField;
use cs_schedule::Timer;
use cs_spatial::{roles, AStarPathFinder, PathFinder, Placeable};

use crate::{Scene, SimError, SimResult};

/// Fluent builder for [`Scene<P>`].
///
/// # Required inputs
///
/// - [`EngineConfig`]
///
/// # Optional inputs (have defaults)
///
/// | Method                   | Default                  |
/// |--------------------------|--------------------------|
/// | `.placeables(v)`         | empty room               |
/// | `.students(v)`           | no students              |
/// | `.teacher(p)`            | no teacher (warned)      |
/// | `.pathfinder(p)`         | [`AStarPathFinder`]      |
///
/// # Example
///
/// ```rust,ignore
/// let mut scene = SceneBuilder::new(config)
///     .placeables(scene_items)
///     .student_records(&roster)?
///     .teacher_record(&teacher)?
///     .build()?;
/// scene.run(&mut NoopObserver);
/// ```
pub struct SceneBuilder<P: PathFinder = AStarPathFinder> {
    config:     EngineConfig,
    placeables: Vec<Placeable>,
    students:   Vec<AgentProfile>,
    teacher:    Option<AgentProfile>,
    pathfinder: P,
}

impl SceneBuilder<AStarPathFinder> {
    pub fn new(config: EngineConfig) -> Self {
        Self {
            config,
            placeables: Vec::new(),
            students:   Vec::new(),
            teacher:    None,
            pathfinder: AStarPathFinder,
        }
    }
}

impl<P: PathFinder> SceneBuilder<P> {
    /// Replace the path finder.
    pub fn pathfinder<Q: PathFinder>(self, pathfinder: Q) -> SceneBuilder<Q> {
        SceneBuilder {
            config:     self.config,
            placeables: self.placeables,
            students:   self.students,
            teacher:    self.teacher,
            pathfinder,
        }
    }

    /// The room layout in scene order.  Chair order decides seat assignment.
    pub fn placeables(mut self, placeables: Vec<Placeable>) -> Self {
        self.placeables = placeables;
        self
    }

    pub fn students(mut self, students: Vec<AgentProfile>) -> Self {
        self.students = students;
        self
    }

    /// Validate and add roster records.  The first invalid record aborts.
    pub fn student_records(mut self, records: &[AgentRecord]) -> SimResult<Self> {
        for record in records {
            self.students.push(AgentProfile::from_record(record)?);
        }
        Ok(self)
    }

    pub fn teacher(mut self, teacher: AgentProfile) -> Self {
        self.teacher = Some(teacher);
        self
    }

    pub fn teacher_record(mut self, record: &AgentRecord) -> SimResult<Self> {
        self.teacher = Some(AgentProfile::from_record(record)?);
        Ok(self)
    }

    /// Validate the configuration and roster, rasterize the venue, and
    /// return a scene positioned at Monday of week 1, `start_time`.
    pub fn build(self) -> SimResult<Scene<P>> {
        self.config.validate()?;

        let mut seen = HashSet::with_capacity(self.students.len());
        for p in &self.students {
            if !seen.insert(p.id) {
                return Err(SimError::Config(format!("duplicate student id {}", p.id.0)));
            }
        }

        let venue = Venue::new(self.placeables, &self.config);
        if !venue.has(roles::ENTRANCE) {
            tracing::warn!("scene has no Entrance; agents will never enter");
        }
        let chairs = venue.all(roles::CHAIR).count();
        if self.students.iter().any(|p| p.id.index() >= chairs) {
            tracing::warn!(chairs, students = self.students.len(), "some students have no chair");
        }
        if self.teacher.is_none() {
            tracing::warn!("scene has no teacher; continuing with students only");
        }

        let seed = self.config.seed;
        let students = self.students.into_iter().map(|p| Agent::student(p, seed)).collect();
        let teacher = self.teacher.map(|p| Agent::teacher(p, seed));

        let timer = Timer::from_config(&self.config)?;
        let spread = SpreadField::from_config(&self.config)?;

        Ok(Scene {
            config: self.config,
            venue,
            students,
            teacher,
            timer,
            spread,
            pathfinder: self.pathfinder,
            deposits: Vec::new(),
            finished: false,
        })
    }
}
