/// Make "string-like" implementations of `serde::Deserialize` and
/// `serde::Serialize` for the given type, using that type's `Display` and
/// `FromStr` impls.
///
/// (This is used for example to serialize a protein as `"MKV"` rather than
/// `["M","K","V"]`.)
macro_rules! impl_stringlike {
    ($type:ty) => {
        impl<'de> serde::Deserialize<'de> for $type {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                struct Helper;
                impl<'de> serde::de::Visitor<'de> for Helper {
                    type Value = $type;

                    fn expecting(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                        write!(formatter, "a string")
                    }

                    fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
                    where
                        E: serde::de::Error,
                    {
                        value
                            .parse::<Self::Value>()
                            .map_err(serde::de::Error::custom)
                    }
                }

                deserializer.deserialize_str(Helper)
            }
        }

        impl serde::Serialize for $type {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: serde::Serializer,
            {
                serializer.collect_str(self)
            }
        }
    };
}

pub(crate) use impl_stringlike;

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use crate::{AminoAcidFrame, Codon, DnaSequence, NucleotideCounts, Protein};

    #[test]
    fn test_sequences_serialize_as_strings() {
        let dna = DnaSequence::from_str("atgc").unwrap();
        assert_eq!(serde_json::to_string(&dna).unwrap(), "\"ATGC\"");
        let protein = Protein::from_str("MKV").unwrap();
        assert_eq!(serde_json::to_string(&protein).unwrap(), "\"MKV\"");
        let frame = AminoAcidFrame::from_str("MK_").unwrap();
        assert_eq!(serde_json::to_string(&frame).unwrap(), "\"MK_\"");
    }

    #[test]
    fn test_deserialize_validates() {
        let codon: Codon = serde_json::from_str("\"TAG\"").unwrap();
        assert_eq!(codon.to_string(), "TAG");
        assert!(serde_json::from_str::<DnaSequence>("\"ACGN\"").is_err());
    }

    #[test]
    fn test_counts_round_trip() {
        let counts = NucleotideCounts {
            a: 1,
            c: 2,
            g: 3,
            t: 4,
        };
        let json = serde_json::to_string(&counts).unwrap();
        assert_eq!(serde_json::from_str::<NucleotideCounts>(&json).unwrap(), counts);
    }
}
