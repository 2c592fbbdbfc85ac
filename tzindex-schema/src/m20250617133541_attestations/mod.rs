//! Endorsements are called attestations since the Paris protocol.

use tzindex_migrator::vec_box;

use crate::{
    ops::{CreateIndex, RenameColumn, RenameTable, Revert},
    table::{AppState, AttestationOps, BakerCycles, EndorsementOps},
};

/// Renames endorsement tables, columns and indexes to attestations.
///
/// Rows are kept: the table is renamed in place, its indexes are dropped
/// before and recreated under their new names after.
pub struct M20250617133541Attestations;

tzindex_migrator::migration!(
    M20250617133541Attestations,
    "20250617133541_Attestations",
    vec_box![
        Revert(
            CreateIndex::new("IX_EndorsementOps_Level", EndorsementOps::Table)
                .col(EndorsementOps::Level)
        ),
        Revert(
            CreateIndex::new("IX_EndorsementOps_OpHash", EndorsementOps::Table)
                .col(EndorsementOps::OpHash)
        ),
        RenameTable::new(EndorsementOps::Table, AttestationOps::Table),
        CreateIndex::new("IX_AttestationOps_Level", AttestationOps::Table)
            .col(AttestationOps::Level),
        CreateIndex::new("IX_AttestationOps_OpHash", AttestationOps::Table)
            .col(AttestationOps::OpHash),
        RenameColumn::new(
            AppState::Table,
            AppState::EndorsementOpsCount,
            AppState::AttestationOpsCount
        ),
        RenameColumn::new(
            BakerCycles::Table,
            BakerCycles::ExpectedEndorsements,
            BakerCycles::ExpectedAttestations
        ),
        RenameColumn::new(
            BakerCycles::Table,
            BakerCycles::Endorsements,
            BakerCycles::Attestations
        ),
        RenameColumn::new(
            BakerCycles::Table,
            BakerCycles::EndorsementRewards,
            BakerCycles::AttestationRewards
        ),
    ]
);
