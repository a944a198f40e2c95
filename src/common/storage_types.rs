// S3 storage classes as CloudWatch reports them
#![forbid(unsafe_code)]
#![deny(missing_docs)]

/// The standard storage class on its own.
pub const STANDARD_STORAGE: &[&str] = &[
    "StandardStorage",
];

/// Every storage class CloudWatch publishes `BucketSizeBytes` under.
pub const ALL_STORAGE_TYPES: &[&str] = &[
    "StandardStorage",
    "IntelligentTieringFAStorage",
    "IntelligentTieringIAStorage",
    "IntelligentTieringAAStorage",
    "IntelligentTieringAIAStorage",
    "IntelligentTieringDAAStorage",
    "StandardIAStorage",
    "StandardIASizeOverhead",
    "StandardIAObjectOverhead",
    "OneZoneIAStorage",
    "OneZoneIASizeOverhead",
    "ReducedRedundancyStorage",
    "GlacierInstantRetrievalSizeOverhead",
    "GlacierInstantRetrievalStorage",
    "GlacierStorage",
    "GlacierStagingStorage",
    "GlacierObjectOverhead",
    "GlacierS3ObjectOverhead",
    "DeepArchiveStorage",
    "DeepArchiveObjectOverhead",
    "DeepArchiveS3ObjectOverhead",
    "DeepArchiveStagingStorage",
];
