//! Domain categories and the capability traits attached to them.
//!
//! The catalog has hundreds of concrete types. Instead of one struct per
//! type, an asset carries its type name and behavior is selected by the
//! category that name maps to.

use crate::model::asset::Asset;
use crate::model::qualified_name::parse_qualified_name;

/// Coarse grouping of catalog types that share behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AssetCategory {
    /// Relational objects: databases, schemas, tables, views, columns.
    Sql,
    /// Dashboards, reports and BI projects.
    Bi,
    /// Glossaries, categories and terms.
    Glossary,
    /// Personas, purposes and their policies.
    AccessControl,
    /// Source-system connections.
    Connection,
    /// Lineage processes.
    Process,
    Other,
}

const SQL_TYPES: &[&str] = &[
    "Database",
    "Schema",
    "Table",
    "View",
    "MaterialisedView",
    "TablePartition",
    "Column",
    "Procedure",
    "SnowflakePipe",
    "SnowflakeStream",
];

const BI_TYPES: &[&str] = &[
    "MicroStrategyProject",
    "MicroStrategyReport",
    "MicroStrategyDossier",
    "MicroStrategyMetric",
    "TableauWorkbook",
    "TableauDashboard",
    "PowerBIWorkspace",
    "PowerBIReport",
    "PowerBIDashboard",
    "LookerDashboard",
];

const GLOSSARY_TYPES: &[&str] = &["AtlasGlossary", "AtlasGlossaryCategory", "AtlasGlossaryTerm"];

const ACCESS_CONTROL_TYPES: &[&str] = &["AuthPolicy", "Persona", "Purpose"];

const PROCESS_TYPES: &[&str] = &["Process", "ColumnProcess", "BIProcess"];

impl AssetCategory {
    /// Category of a type name; unknown names map to `Other`.
    pub fn of(type_name: &str) -> Self {
        if SQL_TYPES.contains(&type_name) {
            Self::Sql
        } else if BI_TYPES.contains(&type_name) {
            Self::Bi
        } else if GLOSSARY_TYPES.contains(&type_name) {
            Self::Glossary
        } else if ACCESS_CONTROL_TYPES.contains(&type_name) {
            Self::AccessControl
        } else if PROCESS_TYPES.contains(&type_name) {
            Self::Process
        } else if type_name == "Connection" {
            Self::Connection
        } else {
            Self::Other
        }
    }

    /// Whether assets of this category may live under a connection.
    ///
    /// Only glossary and access-control assets are tenant-wide. For `Process`
    /// and `Other` the qualified name decides: it must parse as
    /// `default/<connector>/<epoch>/...`.
    pub fn is_connection_scoped(self) -> bool {
        !matches!(self, Self::Glossary | Self::AccessControl)
    }
}

/// Capability of assets that belong to a source-system connection.
pub trait ConnectionScoped {
    fn scoped_qualified_name(&self) -> &str;

    /// Qualified name of the owning connection (itself for a connection).
    fn connection_qualified_name(&self) -> Option<String> {
        parse_qualified_name(self.scoped_qualified_name())
            .map(|parsed| parsed.connection_qualified_name.to_string())
    }

    /// Connector segment of the qualified name, e.g. `snowflake`.
    fn connector_name(&self) -> Option<String> {
        parse_qualified_name(self.scoped_qualified_name())
            .map(|parsed| parsed.connector_name.to_string())
    }
}

/// Capability of relational assets to name their containers.
///
/// Depth follows the SQL hierarchy: database, schema, then table or view.
/// Every accessor is `None` for assets outside the SQL category.
pub trait SqlHierarchy: ConnectionScoped {
    /// Qualified name when the asset is relational.
    fn sql_qualified_name(&self) -> Option<&str>;

    fn database_qualified_name(&self) -> Option<String> {
        parse_qualified_name(self.sql_qualified_name()?)?.prefix(1)
    }

    fn schema_qualified_name(&self) -> Option<String> {
        parse_qualified_name(self.sql_qualified_name()?)?.prefix(2)
    }

    /// Table, view or materialised view that contains a column.
    fn parent_qualified_name(&self) -> Option<String> {
        parse_qualified_name(self.sql_qualified_name()?)?.prefix(3)
    }
}

impl ConnectionScoped for Asset {
    fn scoped_qualified_name(&self) -> &str {
        if self.type_name.category().is_connection_scoped() {
            &self.qualified_name
        } else {
            ""
        }
    }
}

impl SqlHierarchy for Asset {
    fn sql_qualified_name(&self) -> Option<&str> {
        (self.type_name.category() == AssetCategory::Sql).then_some(self.qualified_name.as_str())
    }
}
