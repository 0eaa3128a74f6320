//! Various Rocket League constants.

/// Source: https://github.com/RLBot/RLBot/wiki/Useful-Game-Values
pub const GRAVITY: f32 = -650.0;

/// The radius of the ball.
pub const BALL_RADIUS: f32 = 91.24;

/// The z location of the Octane when sitting on the ground.
pub const OCTANE_NEUTRAL_Z: f32 = 17.01;

/// A full boost tank.
pub const BOOST_MAX: f32 = 100.0;

/// Somewhere no ball will ever reach. Used to park cars that a drill does not
/// want on the field.
pub const OUT_OF_PLAY: f32 = 10_000.0;
