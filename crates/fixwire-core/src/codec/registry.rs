use crate::convert::Converter;
use crate::wire::WireType;

/// Table of converters indexed by `WireType::index`.
///
/// Built once when a codec is constructed and never modified afterwards.
///
/// # Examples
/// ```
/// use fixwire_core::{Registry, WireType};
///
/// let registry = Registry::numeric();
/// assert_eq!(registry.len(), 9);
/// assert!(registry.contains(WireType::UInt32));
/// assert!(!registry.contains(WireType::Bool));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Registry {
    slots: [Option<Converter>; WireType::COUNT],
}

impl Registry {
    /// The nine numeric converters (i8, u8, i16, u16, i32, u32, i64, f32, f64).
    pub fn numeric() -> Self {
        let mut slots = [None; WireType::COUNT];
        for ty in WireType::ALL.into_iter().filter(|ty| *ty != WireType::Bool) {
            slots[ty.index()] = Some(Converter::for_type(ty));
        }
        Self { slots }
    }

    /// The numeric converters plus the one-byte boolean converter.
    pub fn numeric_with_bool() -> Self {
        let mut registry = Self::numeric();
        registry.slots[WireType::Bool.index()] = Some(Converter::for_type(WireType::Bool));
        registry
    }

    pub fn get(&self, wire_type: WireType) -> Option<&Converter> {
        self.slots[wire_type.index()].as_ref()
    }

    pub fn contains(&self, wire_type: WireType) -> bool {
        self.get(wire_type).is_some()
    }

    /// Registered wire types, in table order.
    pub fn types(&self) -> impl Iterator<Item = WireType> + '_ {
        WireType::ALL
            .into_iter()
            .filter(move |ty| self.contains(*ty))
    }

    pub fn len(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::numeric()
    }
}
