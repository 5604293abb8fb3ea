//! Command-arm motion sequencing.
//!
//! Height and fore/aft share the arm's clearance envelope. When the arm must
//! rise, height is actuated before fore/aft; otherwise (lowering, holding, or
//! stopping) fore/aft goes first. The sequencer only orders the two commands,
//! it never alters them.

use msm_common::recall::motor::{MotorId, MotorOrder, MotorPosition, MotorSetpoint};
use msm_common::recall::sequence::{CommandArmSequence, SequenceStep};

use crate::motor::generate_command;

/// Returns true when the height axis must be actuated first.
///
/// Only a target strictly above the current height leads. A fail-safe stop
/// never leads.
#[inline]
pub const fn height_leads(height_order: MotorOrder, height_position: MotorPosition) -> bool {
    match height_order {
        MotorOrder::Target(target) => target > height_position,
        MotorOrder::FailSafeStop => false,
    }
}

/// Ordered height / fore-aft commands for a command-arm recall.
pub fn commandarm_motion_sequence(
    height_order: MotorOrder,
    height_position: MotorPosition,
    foreaft_order: MotorOrder,
    foreaft_position: MotorPosition,
) -> CommandArmSequence {
    let height = SequenceStep::new(
        MotorId::CommandArmHeight,
        generate_command(MotorId::CommandArmHeight, height_order, height_position),
    );
    let fore_aft = SequenceStep::new(
        MotorId::CommandArmForeAft,
        generate_command(MotorId::CommandArmForeAft, foreaft_order, foreaft_position),
    );

    if height_leads(height_order, height_position) {
        CommandArmSequence::new(height, fore_aft)
    } else {
        CommandArmSequence::new(fore_aft, height)
    }
}

/// Sequence from stored setpoints.
pub fn sequence_from_setpoints(height: MotorSetpoint, fore_aft: MotorSetpoint) -> CommandArmSequence {
    commandarm_motion_sequence(height.order, height.position, fore_aft.order, fore_aft.position)
}
