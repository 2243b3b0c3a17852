use swift_mapper_schema::DescriptorSet;

use crate::error::MapperError;

/// Returns `Ok(())` if every file the request refers to is part of `set`:
/// the files to generate and the dependencies of every file.
pub fn verify_descriptor_set(set: &DescriptorSet, files_to_generate: &[String]) -> Result<(), MapperError> {
    for name in files_to_generate {
        if set.file_by_name(name).is_none() {
            return Err(MapperError::FileNotFound(name.clone()));
        }
    }

    for (_, file) in set.files() {
        for dependency in &file.dependencies {
            if set.file_by_name(dependency).is_none() {
                return Err(MapperError::DanglingDependency {
                    file:       file.name.clone(),
                    dependency: dependency.clone(),
                });
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use prost_types::FileDescriptorProto;

    use super::*;

    fn file(name: &str, dependencies: &[&str]) -> FileDescriptorProto {
        FileDescriptorProto {
            name: Some(name.to_string()),
            dependency: dependencies.iter().map(|d| d.to_string()).collect(),
            ..Default::default()
        }
    }

    #[test]
    fn test_consistent_set() {
        let set = DescriptorSet::from_files(&[file("dep.proto", &[]), file("main.proto", &["dep.proto"])]).unwrap();
        assert!(verify_descriptor_set(&set, &["main.proto".to_string()]).is_ok());
    }

    #[test]
    fn test_missing_file_to_generate() {
        let set = DescriptorSet::from_files(&[file("main.proto", &[])]).unwrap();
        let err = verify_descriptor_set(&set, &["other.proto".to_string()]).unwrap_err();
        assert!(matches!(err, MapperError::FileNotFound(name) if name == "other.proto"));
    }

    #[test]
    fn test_dangling_dependency() {
        let set = DescriptorSet::from_files(&[file("main.proto", &["gone.proto"])]).unwrap();
        let err = verify_descriptor_set(&set, &[]).unwrap_err();
        assert_eq!(
            err.to_string(),
            "File \"main.proto\" depends on \"gone.proto\", which is not part of the descriptor set"
        );
    }
}
