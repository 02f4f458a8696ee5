use crate::world::World;

/// Boundary trait for the external physics engine.
///
/// One call advances rigid-body state by a single fixed timestep of
/// `world.params.dt`, reading joint drive targets and gravity from the
/// world and writing back body pose, velocities, and joint state. The
/// control layer never integrates dynamics itself; it only prepares inputs
/// for, and observes outputs of, an implementation of this trait.
pub trait Integrator {
    fn advance(&mut self, world: &mut World);
}
