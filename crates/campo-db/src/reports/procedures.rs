//! Named report procedures.
//!
//! libSQL has no stored procedures, so each named procedure is a registered
//! parameterized query. Every procedure binds the same three parameters:
//! `?1` user ID, `?2` inclusive start date (or NULL), `?3` inclusive end date
//! (or NULL).

use std::fmt;

/// A named report query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Procedure {
    /// Herd snapshot across lots.
    Rebanho,
    /// Per-animal first/last weighing in the range.
    DesempenhoPesagens,
    /// Per-lot expenses, revenue and sale costs in the range.
    DesempenhoLotes,
    /// Expense totals by category.
    GastosPorCategoria,
    /// Expense totals by `YYYY-MM`.
    GastosPorMes,
    /// Overall expense total.
    GastosTotal,
}

impl Procedure {
    pub const ALL: [Self; 6] = [
        Self::Rebanho,
        Self::DesempenhoPesagens,
        Self::DesempenhoLotes,
        Self::GastosPorCategoria,
        Self::GastosPorMes,
        Self::GastosTotal,
    ];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Rebanho => "relatorio_rebanho",
            Self::DesempenhoPesagens => "relatorio_desempenho_pesagens",
            Self::DesempenhoLotes => "relatorio_desempenho_lotes",
            Self::GastosPorCategoria => "relatorio_gastos_por_categoria",
            Self::GastosPorMes => "relatorio_gastos_por_mes",
            Self::GastosTotal => "relatorio_gastos_total",
        }
    }

    #[must_use]
    pub const fn sql(self) -> &'static str {
        match self {
            Self::Rebanho => RELATORIO_REBANHO,
            Self::DesempenhoPesagens => RELATORIO_DESEMPENHO_PESAGENS,
            Self::DesempenhoLotes => RELATORIO_DESEMPENHO_LOTES,
            Self::GastosPorCategoria => RELATORIO_GASTOS_POR_CATEGORIA,
            Self::GastosPorMes => RELATORIO_GASTOS_POR_MES,
            Self::GastosTotal => RELATORIO_GASTOS_TOTAL,
        }
    }

    /// Look a procedure up by its registered name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.name() == name)
    }
}

impl fmt::Display for Procedure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// Columns: total_lots, active_lots, total_heads, total_capacity,
// last_weighing_date, average_weight_kg (mean of each animal's latest weight),
// capacity_heads (heads in active lots that declare a capacity).
// Lots count when they entered on or before the range end; archived lots never count.
const RELATORIO_REBANHO: &str = "
SELECT
    COUNT(l.id),
    COALESCE(SUM(CASE WHEN l.status = 'active' THEN 1 ELSE 0 END), 0),
    COALESCE(SUM(CASE WHEN l.status = 'active' THEN l.head_count ELSE 0 END), 0),
    COALESCE(SUM(CASE WHEN l.status = 'active' THEN COALESCE(l.capacity, 0) ELSE 0 END), 0),
    (SELECT MAX(w.date) FROM weighings w
      WHERE w.user_id = ?1
        AND (?2 IS NULL OR w.date >= ?2)
        AND (?3 IS NULL OR w.date <= ?3)),
    (SELECT AVG(w.weight_kg) FROM weighings w
      WHERE w.user_id = ?1
        AND (?2 IS NULL OR w.date >= ?2)
        AND (?3 IS NULL OR w.date <= ?3)
        AND NOT EXISTS (
            SELECT 1 FROM weighings n
             WHERE n.user_id = w.user_id
               AND n.animal_tag = w.animal_tag
               AND (?2 IS NULL OR n.date >= ?2)
               AND (?3 IS NULL OR n.date <= ?3)
               AND (n.date > w.date OR (n.date = w.date AND n.created_at > w.created_at)))),
    COALESCE(SUM(CASE WHEN l.status = 'active' AND l.capacity IS NOT NULL THEN l.head_count ELSE 0 END), 0)
FROM lots l
WHERE l.user_id = ?1
  AND l.status != 'archived'
  AND (?3 IS NULL OR l.entry_date <= ?3)
";

// Columns: animal_tag, lot_id (of the last weighing), weighings,
// first_date, first_weight_kg, last_date, last_weight_kg.
const RELATORIO_DESEMPENHO_PESAGENS: &str = "
WITH ranged AS (
    SELECT animal_tag, lot_id, date, weight_kg, created_at
      FROM weighings
     WHERE user_id = ?1
       AND (?2 IS NULL OR date >= ?2)
       AND (?3 IS NULL OR date <= ?3)
),
ordered AS (
    SELECT animal_tag, lot_id, date, weight_kg,
           ROW_NUMBER() OVER (PARTITION BY animal_tag ORDER BY date ASC, created_at ASC) AS rn_first,
           ROW_NUMBER() OVER (PARTITION BY animal_tag ORDER BY date DESC, created_at DESC) AS rn_last,
           COUNT(*) OVER (PARTITION BY animal_tag) AS n
      FROM ranged
)
SELECT f.animal_tag, l.lot_id, f.n, f.date, f.weight_kg, l.date, l.weight_kg
  FROM ordered f
  JOIN ordered l ON l.animal_tag = f.animal_tag AND l.rn_last = 1
 WHERE f.rn_first = 1
 ORDER BY f.animal_tag
";

// Columns: lot_id, name, status, head_count, heads_sold,
// total_expenses, total_revenue, total_sale_costs.
const RELATORIO_DESEMPENHO_LOTES: &str = "
SELECT
    l.id, l.name, l.status, l.head_count,
    COALESCE((SELECT SUM(s.head_count) FROM sales s
               WHERE s.user_id = ?1 AND s.lot_id = l.id
                 AND (?2 IS NULL OR s.date >= ?2)
                 AND (?3 IS NULL OR s.date <= ?3)), 0),
    COALESCE((SELECT SUM(e.amount) FROM expenses e
               WHERE e.user_id = ?1 AND e.lot_id = l.id
                 AND (?2 IS NULL OR e.date >= ?2)
                 AND (?3 IS NULL OR e.date <= ?3)), 0.0),
    COALESCE((SELECT SUM(s.revenue) FROM sales s
               WHERE s.user_id = ?1 AND s.lot_id = l.id
                 AND (?2 IS NULL OR s.date >= ?2)
                 AND (?3 IS NULL OR s.date <= ?3)), 0.0),
    COALESCE((SELECT SUM(s.costs) FROM sales s
               WHERE s.user_id = ?1 AND s.lot_id = l.id
                 AND (?2 IS NULL OR s.date >= ?2)
                 AND (?3 IS NULL OR s.date <= ?3)), 0.0)
FROM lots l
WHERE l.user_id = ?1
  AND l.status != 'archived'
ORDER BY l.entry_date DESC, l.name ASC
";

// Columns: category, total, count.
const RELATORIO_GASTOS_POR_CATEGORIA: &str = "
SELECT category, SUM(amount) AS total, COUNT(*)
  FROM expenses
 WHERE user_id = ?1
   AND (?2 IS NULL OR date >= ?2)
   AND (?3 IS NULL OR date <= ?3)
 GROUP BY category
 ORDER BY total DESC, category ASC
";

// Columns: month (`YYYY-MM`), total.
const RELATORIO_GASTOS_POR_MES: &str = "
SELECT substr(date, 1, 7) AS month, SUM(amount)
  FROM expenses
 WHERE user_id = ?1
   AND (?2 IS NULL OR date >= ?2)
   AND (?3 IS NULL OR date <= ?3)
 GROUP BY month
 ORDER BY month ASC
";

// Columns: total, count. Always exactly one row.
const RELATORIO_GASTOS_TOTAL: &str = "
SELECT COALESCE(SUM(amount), 0.0), COUNT(*)
  FROM expenses
 WHERE user_id = ?1
   AND (?2 IS NULL OR date >= ?2)
   AND (?3 IS NULL OR date <= ?3)
";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_are_unique_and_resolvable() {
        for procedure in Procedure::ALL {
            assert_eq!(Procedure::from_name(procedure.name()), Some(procedure));
            assert!(procedure.sql().contains("?1"));
        }
        assert_eq!(Procedure::from_name("relatorio_inexistente"), None);
    }
}
