//! Table and column identifiers of the indexer schema.
//!
//! Used with sea-query for type-safe statement construction. Identifiers keep
//! the indexer's PascalCase names, so every enum renders verbatim: the `Table`
//! variant as the enum name, the others as the variant name.
//!
//! Enums are never removed once a migration references them, even when a later
//! migration renames or drops the table (see [`EndorsementOps`],
//! [`Addresses`]).

use std::fmt::Write;

use sea_query::Iden;

macro_rules! table {
    ($(#[$meta:meta])* $name:ident { $($column:ident),* $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq)]
        pub enum $name {
            Table,
            $($column,)*
        }

        impl Iden for $name {
            fn unquoted(&self, s: &mut dyn Write) {
                let name = match self {
                    Self::Table => stringify!($name),
                    $(Self::$column => stringify!($column),)*
                };

                let _ = s.write_str(name);
            }
        }
    };
}

table! {
    /// Single-row indexer state: head, counters per operation kind.
    AppState {
        Id,
        Level,
        Hash,
        Protocol,
        NextProtocol,
        Timestamp,
        AccountCounter,
        OperationCounter,
        EndorsementOpsCount,
        AttestationOpsCount,
        TransactionOpsCount,
        DelegationOpsCount,
        RevealOpsCount,
        TokensCount,
        TokenBalancesCount,
        TokenTransfersCount,
        DrainDelegateOpsCount,
        UpdateConsensusKeyOpsCount,
        SmartRollupOriginateOpsCount,
        SmartRollupAddMessagesOpsCount,
    }
}

table! {
    Protocols {
        Id,
        Code,
        Hash,
        FirstLevel,
        LastLevel,
        FirstCycle,
        Constants,
    }
}

table! {
    /// Renamed to [`Accounts`] by `20191113225956_Initial`.
    Addresses {
        Id,
        Address,
        Type,
        Balance,
        Counter,
        FirstLevel,
        LastLevel,
    }
}

table! {
    Accounts {
        Id,
        Address,
        Type,
        Balance,
        Counter,
        FirstLevel,
        LastLevel,
        DelegateId,
        DelegationLevel,
        ActiveTokensCount,
        TokenBalancesCount,
    }
}

table! {
    Blocks {
        Id,
        Level,
        Hash,
        Timestamp,
        ProtoCode,
        Priority,
        Validations,
        Operations,
        BakerId,
        Reward,
        Fees,
    }
}

table! {
    /// Renamed to [`AttestationOps`] by `20250617133541_Attestations`.
    EndorsementOps {
        Id,
        Level,
        OpHash,
        Timestamp,
        DelegateId,
        Slots,
        Reward,
    }
}

table! {
    AttestationOps {
        Id,
        Level,
        OpHash,
        Timestamp,
        DelegateId,
        Slots,
        Reward,
    }
}

table! {
    TransactionOps {
        Id,
        Level,
        OpHash,
        Timestamp,
        SenderId,
        TargetId,
        Amount,
        BakerFee,
        Status,
        Parameters,
    }
}

table! {
    DelegationOps {
        Id,
        Level,
        OpHash,
        Timestamp,
        SenderId,
        DelegateId,
        PrevDelegateId,
        BakerFee,
        Status,
    }
}

table! {
    RevealOps {
        Id,
        Level,
        OpHash,
        Timestamp,
        SenderId,
        BakerFee,
        Status,
    }
}

table! {
    Cycles {
        Index,
        FirstLevel,
        LastLevel,
        SnapshotIndex,
        SnapshotLevel,
        Seed,
        TotalBakers,
        TotalStaking,
    }
}

table! {
    VotingPeriods {
        Id,
        Index,
        Epoch,
        FirstLevel,
        LastLevel,
        Kind,
        Status,
    }
}

table! {
    BakerCycles {
        Id,
        Cycle,
        BakerId,
        StakingBalance,
        ExpectedBlocks,
        ExpectedEndorsements,
        ExpectedAttestations,
        Blocks,
        Endorsements,
        Attestations,
        BlockRewards,
        EndorsementRewards,
        AttestationRewards,
    }
}

table! {
    BigMaps {
        Id,
        Ptr,
        ContractId,
        StoragePath,
        Active,
        KeyType,
        ValueType,
        FirstLevel,
        LastLevel,
        TotalKeys,
        ActiveKeys,
        Updates,
    }
}

table! {
    BigMapKeys {
        Id,
        BigMapPtr,
        Active,
        KeyHash,
        RawKey,
        JsonKey,
        RawValue,
        JsonValue,
        FirstLevel,
        LastLevel,
        Updates,
    }
}

table! {
    BigMapUpdates {
        Id,
        BigMapPtr,
        Action,
        Level,
        TransactionId,
        BigMapKeyId,
        RawValue,
        JsonValue,
    }
}

table! {
    Tokens {
        Id,
        ContractId,
        TokenId,
        Standard,
        FirstLevel,
        LastLevel,
        TransfersCount,
        BalancesCount,
        HoldersCount,
        TotalMinted,
        TotalBurned,
        TotalSupply,
        Metadata,
    }
}

table! {
    TokenBalances {
        Id,
        AccountId,
        TokenId,
        Balance,
        FirstLevel,
        LastLevel,
        TransfersCount,
    }
}

table! {
    TokenTransfers {
        Id,
        Level,
        TokenId,
        FromId,
        ToId,
        Amount,
        TransactionId,
    }
}

table! {
    DrainDelegateOps {
        Id,
        Level,
        OpHash,
        Timestamp,
        DelegateId,
        TargetId,
        Amount,
        Fee,
        AllocationFee,
    }
}

table! {
    UpdateConsensusKeyOps {
        Id,
        Level,
        OpHash,
        Timestamp,
        SenderId,
        ActivationCycle,
        PublicKey,
        PublicKeyHash,
        BakerFee,
        Status,
        Errors,
    }
}

table! {
    SmartRollupOriginateOps {
        Id,
        Level,
        OpHash,
        Timestamp,
        SenderId,
        SmartRollupId,
        PvmKind,
        Kernel,
        ParameterType,
        GenesisCommitment,
        BakerFee,
        Status,
    }
}

table! {
    SmartRollupAddMessagesOps {
        Id,
        Level,
        OpHash,
        Timestamp,
        SenderId,
        MessagesCount,
        BakerFee,
        Status,
    }
}

table! {
    SmartRollupCommitments {
        Id,
        SmartRollupId,
        InitiatorId,
        InboxLevel,
        State,
        Hash,
        Ticks,
        FirstLevel,
        LastLevel,
        Status,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_pascal_case_names() {
        assert_eq!(Blocks::Table.to_string(), "Blocks");
        assert_eq!(Blocks::Operations.to_string(), "Operations");
        assert_eq!(AppState::Table.to_string(), "AppState");
        assert_eq!(
            UpdateConsensusKeyOps::PublicKeyHash.to_string(),
            "PublicKeyHash"
        );
    }
}
