use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DistanceConstraint {
    pub atoms: [usize; 2],
    /// Target distance in Ångström.
    pub target: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AngleConstraint {
    pub atoms: [usize; 3],
    /// Target angle in degrees.
    pub target: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TorsionConstraint {
    pub atoms: [usize; 4],
    /// Target dihedral in degrees.
    pub target: f64,
}

/// Fully resolved minimization constraints.
///
/// All atom indices are zero-based. Backends that number atoms from one convert
/// at their own boundary.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ConstraintSet {
    /// Atoms excluded from the force-field calculation.
    pub ignore: Vec<usize>,
    /// Atoms whose positions are frozen.
    pub fixed: Vec<usize>,
    pub distances: Vec<DistanceConstraint>,
    pub angles: Vec<AngleConstraint>,
    pub torsions: Vec<TorsionConstraint>,
}

impl ConstraintSet {
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn len(&self) -> usize {
        self.ignore.len()
            + self.fixed.len()
            + self.distances.len()
            + self.angles.len()
            + self.torsions.len()
    }

    /// Every atom index referenced by the set, in no particular order.
    pub fn atoms(&self) -> impl Iterator<Item = usize> + '_ {
        self.ignore
            .iter()
            .chain(&self.fixed)
            .chain(self.distances.iter().flat_map(|c| &c.atoms))
            .chain(self.angles.iter().flat_map(|c| &c.atoms))
            .chain(self.torsions.iter().flat_map(|c| &c.atoms))
            .copied()
    }

    /// Returns a copy with every atom index moved up by `offset`.
    ///
    /// Fails with the first index that would overflow.
    pub fn offset_indices(&self, offset: usize) -> Result<ConstraintSet, usize> {
        let shift = |index: usize| index.checked_add(offset).ok_or(index);
        let shift_list =
            |list: &[usize]| list.iter().map(|&index| shift(index)).collect::<Result<Vec<_>, _>>();

        Ok(ConstraintSet {
            ignore: shift_list(&self.ignore)?,
            fixed: shift_list(&self.fixed)?,
            distances: self
                .distances
                .iter()
                .map(|c| -> Result<DistanceConstraint, usize> {
                    Ok(DistanceConstraint {
                        atoms: shift_atoms(c.atoms, offset)?,
                        target: c.target,
                    })
                })
                .collect::<Result<_, _>>()?,
            angles: self
                .angles
                .iter()
                .map(|c| -> Result<AngleConstraint, usize> {
                    Ok(AngleConstraint {
                        atoms: shift_atoms(c.atoms, offset)?,
                        target: c.target,
                    })
                })
                .collect::<Result<_, _>>()?,
            torsions: self
                .torsions
                .iter()
                .map(|c| -> Result<TorsionConstraint, usize> {
                    Ok(TorsionConstraint {
                        atoms: shift_atoms(c.atoms, offset)?,
                        target: c.target,
                    })
                })
                .collect::<Result<_, _>>()?,
        })
    }
}

fn shift_atoms<const N: usize>(atoms: [usize; N], offset: usize) -> Result<[usize; N], usize> {
    let mut shifted = atoms;
    for slot in &mut shifted {
        *slot = slot.checked_add(offset).ok_or(*slot)?;
    }
    Ok(shifted)
}
